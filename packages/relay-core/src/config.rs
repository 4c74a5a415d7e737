use crate::errors::ConfigError;
use crate::transform::TransformKind;

/// 出力先バケット名の環境変数
pub const DESTINATION_BUCKET_VAR: &str = "PUT_BUCKET_NAME";

/// 変換種別の環境変数
pub const TRANSFORM_KIND_VAR: &str = "MODIFICATION_TYPE";

/// プロセス全体の設定（起動時に一度だけ検証する）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub destination_bucket: String,
    pub transform: TransformKind,
}

impl RelayConfig {
    pub fn new(
        destination_bucket: impl Into<String>,
        transform: TransformKind,
    ) -> Result<Self, ConfigError> {
        // 空のバケット名へアップロードしないよう起動時に弾く
        let destination_bucket = destination_bucket.into().trim().to_string();
        if destination_bucket.is_empty() {
            return Err(ConfigError::Missing(DESTINATION_BUCKET_VAR));
        }

        Ok(Self {
            destination_bucket,
            transform,
        })
    }

    /// 環境変数から RelayConfig を作成する
    ///
    /// 環境変数:
    /// - PUT_BUCKET_NAME（必須）
    /// - MODIFICATION_TYPE（grayscale / invert / horizontal / vertical、未設定なら無変換）
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意のルックアップ関数から RelayConfig を作成する
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let destination_bucket =
            lookup(DESTINATION_BUCKET_VAR).ok_or(ConfigError::Missing(DESTINATION_BUCKET_VAR))?;

        // 未設定は空文字と同じ扱い（Identity）
        let transform = TransformKind::parse(&lookup(TRANSFORM_KIND_VAR).unwrap_or_default())?;

        Self::new(destination_bucket, transform)
    }
}
