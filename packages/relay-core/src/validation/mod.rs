pub mod key;

pub use key::{decode_event_key, derive_output_key, validate_key};
