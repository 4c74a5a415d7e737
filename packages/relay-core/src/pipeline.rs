use bytes::Bytes;
use std::fmt;

use crate::config::RelayConfig;
use crate::constants::OUTPUT_CONTENT_TYPE;
use crate::errors::RelayError;
use crate::request::{InvocationResult, TransformRequest};
use crate::storage::{ObjectFetcher, ObjectStore};
use crate::transform::{apply_transform, decode_image, encode_png};
use crate::validation::validate_key;

/// 1 回の呼び出しの処理段階（この順に進む）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Decoding,
    Transforming,
    Encoding,
    Storing,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Fetching => "fetching",
            Stage::Decoding => "decoding",
            Stage::Transforming => "transforming",
            Stage::Encoding => "encoding",
            Stage::Storing => "storing",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// 画像を取得し、変換して PNG で保存する
///
/// 各段階は順番に実行し、最初の失敗で打ち切る（リトライなし）
pub struct Relay<F, S> {
    config: RelayConfig,
    fetcher: F,
    store: S,
}

impl<F, S> Relay<F, S>
where
    F: ObjectFetcher,
    S: ObjectStore,
{
    pub fn new(config: RelayConfig, fetcher: F, store: S) -> Self {
        Self {
            config,
            fetcher,
            store,
        }
    }

    /// ソースオブジェクトから TransformRequest を作成する
    pub fn request(
        &self,
        source_bucket: &str,
        object_key: &str,
    ) -> Result<TransformRequest, RelayError> {
        // 空文字チェック
        if source_bucket.is_empty() {
            return Err(RelayError::Validation("source bucket is empty".to_string()));
        }

        // 同一バケットはトリガーのプレフィックス/サフィックス設定次第で正当なので警告のみ
        if source_bucket == self.config.destination_bucket {
            tracing::warn!(
                bucket = %source_bucket,
                "source bucket is also the destination bucket, check the trigger filters"
            );
        }

        validate_key(object_key)?;

        let request = TransformRequest {
            source_bucket: source_bucket.to_string(),
            object_key: object_key.to_string(),
            destination_bucket: self.config.destination_bucket.clone(),
            transform: self.config.transform,
        };

        // 出力キーも S3 の長さ制限に収まること
        validate_key(&request.output_key())?;

        Ok(request)
    }

    /// TransformRequest を作成して実行する
    pub async fn handle(
        &self,
        source_bucket: &str,
        object_key: &str,
    ) -> Result<InvocationResult, RelayError> {
        let request = self.request(source_bucket, object_key)?;
        self.run(&request).await
    }

    /// 取得 → デコード → 変換 → エンコード → 保存
    pub async fn run(&self, request: &TransformRequest) -> Result<InvocationResult, RelayError> {
        // ソースオブジェクトを取得
        tracing::info!(
            stage = %Stage::Fetching,
            bucket = %request.source_bucket,
            key = %request.object_key,
            "fetching object"
        );
        let input = self
            .fetcher
            .fetch(&request.source_bucket, &request.object_key)
            .await
            .map_err(RelayError::Fetch)?;

        // デコード失敗はここで打ち切る（不正な画像のまま先へ進めない）
        tracing::debug!(stage = %Stage::Decoding, size = input.len(), "decoding image");
        let decoded = decode_image(&input)?;

        tracing::info!(
            stage = %Stage::Transforming,
            width = decoded.width(),
            height = decoded.height(),
            format = ?decoded.format,
            transform = ?request.transform,
            "transforming image"
        );
        let transformed = apply_transform(decoded, request.transform);

        // 出力は常に PNG（ロスレス）
        tracing::debug!(stage = %Stage::Encoding, "encoding PNG");
        let encoded = encode_png(&transformed)?;

        let output_key = request.output_key();
        tracing::info!(
            stage = %Stage::Storing,
            bucket = %request.destination_bucket,
            key = %output_key,
            size = encoded.len(),
            "storing object"
        );
        self.store
            .store(
                &request.destination_bucket,
                &output_key,
                Bytes::from(encoded),
                OUTPUT_CONTENT_TYPE,
            )
            .await
            .map_err(RelayError::Store)?;

        tracing::info!(stage = %Stage::Done, key = %output_key, "relay complete");
        Ok(InvocationResult::success(&request.destination_bucket))
    }
}
