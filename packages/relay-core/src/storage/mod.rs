pub mod backend;
pub mod memory;

pub use backend::{ObjectFetcher, ObjectStore};
pub use memory::MemoryStorage;
// StorageError は errors モジュールで定義済み
pub use crate::errors::StorageError;
