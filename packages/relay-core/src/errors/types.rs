use thiserror::Error;

use crate::pipeline::Stage;

/// 1 回の呼び出しの統合エラー型
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid event: {0}")]
    InvalidEvent(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("fetch failed: {0}")]
    Fetch(#[source] StorageError),

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("store failed: {0}")]
    Store(#[source] StorageError),
}

impl RelayError {
    /// エラーが発生した処理段階
    pub fn stage(&self) -> Option<Stage> {
        match self {
            // パイプライン開始前のエラー
            RelayError::InvalidEvent(_) | RelayError::Validation(_) => None,
            RelayError::Fetch(_) => Some(Stage::Fetching),
            RelayError::Transform(TransformError::Decode(_))
            | RelayError::Transform(TransformError::ResolutionTooLarge { .. }) => {
                Some(Stage::Decoding)
            }
            RelayError::Transform(TransformError::Encode(_)) => Some(Stage::Encoding),
            RelayError::Store(_) => Some(Stage::Storing),
        }
    }
}

/// ストレージアクセスエラー
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },

    #[error("access denied: {bucket}/{key}")]
    Forbidden { bucket: String, key: String },

    #[error("storage error: {0}")]
    Internal(String),
}

/// 画像変換エラー
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("decode failed: {0}")]
    Decode(String),

    #[error("image resolution exceeds maximum ({width}x{height})")]
    ResolutionTooLarge { width: u32, height: u32 },

    #[error("encode failed: {0}")]
    Encode(String),
}

/// 起動時の設定エラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("unknown transform kind: {0:?} (expected grayscale, invert, horizontal or vertical)")]
    UnknownTransform(String),
}
