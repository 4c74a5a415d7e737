pub mod config;
pub mod constants;
pub mod errors;
pub mod pipeline;
pub mod request;
pub mod storage;
pub mod transform;
pub mod validation;

// 公開API
pub use config::{DESTINATION_BUCKET_VAR, RelayConfig, TRANSFORM_KIND_VAR};
pub use constants::{FAILURE_MESSAGE, MAX_KEY_LENGTH, MAX_PIXELS, OUTPUT_CONTENT_TYPE};
pub use errors::{ConfigError, RelayError, StorageError, TransformError};
pub use pipeline::{Relay, Stage};
pub use request::{InvocationResult, TransformRequest};
pub use storage::{MemoryStorage, ObjectFetcher, ObjectStore};
pub use transform::{PixelImage, TransformKind, apply_transform, decode_image, encode_png};
pub use validation::{decode_event_key, derive_output_key, validate_key};
