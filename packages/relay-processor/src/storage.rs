use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

use relay_core::{ObjectFetcher, ObjectStore, StorageError};

/// S3 を使った ObjectFetcher / ObjectStore の実装
#[derive(Clone)]
pub struct S3ObjectStorage {
    client: Client,
}

impl S3ObjectStorage {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectFetcher for S3ObjectStorage {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError> {
        tracing::debug!(bucket = %bucket, key = %key, "get_object");

        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| s3_error(e, bucket, key))?;

        // ボディを最後まで読み込む
        let data = output
            .body
            .collect()
            .await
            .map_err(|e| {
                tracing::error!(bucket = %bucket, key = %key, error = %e, "failed to read S3 object body");
                StorageError::Internal(format!("failed to read S3 body: {e}"))
            })?
            .into_bytes();

        tracing::debug!(bucket = %bucket, key = %key, size = data.len(), "retrieved object");
        Ok(data)
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStorage {
    async fn store(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let size = data.len();
        tracing::debug!(bucket = %bucket, key = %key, size, "put_object");

        let output = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| s3_error(e, bucket, key))?;

        tracing::debug!(bucket = %bucket, key = %key, etag = ?output.e_tag(), "stored object");
        Ok(())
    }
}

fn s3_error<E, R>(err: SdkError<E, R>, bucket: &str, key: &str) -> StorageError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    // サービスエラーのときだけエラーコードが取れる
    let code = err.as_service_error().and_then(|e| e.code());
    let detail = DisplayErrorContext(&err).to_string();
    classify(code, bucket, key, detail)
}

/// S3 のエラーコードを StorageError に変換する
fn classify(code: Option<&str>, bucket: &str, key: &str, detail: String) -> StorageError {
    match code {
        Some("NoSuchKey" | "NoSuchBucket" | "NotFound") => {
            tracing::warn!(bucket = %bucket, key = %key, "object not found");
            StorageError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            }
        }
        Some("AccessDenied" | "Forbidden") => {
            tracing::error!(bucket = %bucket, key = %key, "access denied by S3 (check the function role)");
            StorageError::Forbidden {
                bucket: bucket.to_string(),
                key: key.to_string(),
            }
        }
        _ => {
            tracing::error!(bucket = %bucket, key = %key, error = %detail, "S3 request failed");
            StorageError::Internal(detail)
        }
    }
}
