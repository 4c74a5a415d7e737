use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::errors::StorageError;
use crate::storage::{ObjectFetcher, ObjectStore};

/// メモリ上のバケットストレージ（ObjectFetcher / ObjectStore の両方を実装）
///
/// クローンは同じバケットを共有するため、テスト側でハンドルを保持したまま
/// Relay に渡せる
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    objects: HashMap<(String, String), StoredObject>,
    read_only_buckets: HashSet<String>,
    fetches: usize,
    stores: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub data: Bytes,
    pub content_type: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// オブジェクトを配置する（保存回数には数えない）
    pub fn insert(&self, bucket: &str, key: &str, data: impl Into<Bytes>) {
        self.state().objects.insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                data: data.into(),
                content_type: None,
            },
        );
    }

    pub fn get(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.state()
            .objects
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    /// 以降の `bucket` への書き込みを `Forbidden` で失敗させる
    pub fn deny_writes(&self, bucket: &str) {
        self.state().read_only_buckets.insert(bucket.to_string());
    }

    /// 取得の呼び出し回数（成否を問わない）
    pub fn fetch_count(&self) -> usize {
        self.state().fetches
    }

    /// 保存の呼び出し回数（成否を問わない）
    pub fn store_count(&self) -> usize {
        self.state().stores
    }

    pub fn object_count(&self) -> usize {
        self.state().objects.len()
    }
}

#[async_trait]
impl ObjectFetcher for MemoryStorage {
    async fn fetch(&self, bucket: &str, key: &str) -> Result<Bytes, StorageError> {
        let mut state = self.state();
        state.fetches += 1;

        state
            .objects
            .get(&(bucket.to_string(), key.to_string()))
            .map(|object| object.data.clone())
            .ok_or_else(|| StorageError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }
}

#[async_trait]
impl ObjectStore for MemoryStorage {
    async fn store(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let mut state = self.state();
        state.stores += 1;

        // 書き込み禁止のバケット
        if state.read_only_buckets.contains(bucket) {
            return Err(StorageError::Forbidden {
                bucket: bucket.to_string(),
                key: key.to_string(),
            });
        }

        state.objects.insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                data,
                content_type: Some(content_type.to_string()),
            },
        );
        Ok(())
    }
}
