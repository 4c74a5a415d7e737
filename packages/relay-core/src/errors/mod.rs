pub mod types;

pub use types::{ConfigError, RelayError, StorageError, TransformError};
