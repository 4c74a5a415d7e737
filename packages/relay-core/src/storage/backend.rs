use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::StorageError;

/// オブジェクトストレージの読み込み側
#[async_trait]
pub trait ObjectFetcher: Send + Sync {
    /// オブジェクト全体をメモリに読み込む
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError>;
}

/// オブジェクトストレージの書き込み側
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn store(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError>;
}
