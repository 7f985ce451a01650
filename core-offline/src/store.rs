//! Named cache buckets keyed by request URL.
//!
//! A bucket maps a request identity (effectively GET + URL) to a stored
//! response. Writes are last-writer-wins per key; no invariant depends on
//! interleaving order, so buckets take no lock across lookup/store pairs.

use crate::error::{OfflineError, Result};
use async_trait::async_trait;
use bridge_traits::http::HttpResponse;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One named bucket of stored responses.
#[async_trait]
pub trait CacheBucket: Send + Sync {
    /// Look up the stored response for a URL.
    async fn lookup(&self, url: &str) -> Result<Option<HttpResponse>>;

    /// Store a response, overwriting any prior entry for the URL.
    async fn store(&self, url: &str, response: HttpResponse) -> Result<()>;

    /// Number of entries currently stored.
    async fn len(&self) -> usize;
}

/// Registry of named buckets, at most one of which is current.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Open a bucket by name, creating it if absent.
    async fn open(&self, name: &str) -> Result<Arc<dyn CacheBucket>>;

    /// Names of all buckets currently present.
    async fn keys(&self) -> Result<Vec<String>>;

    /// Delete a bucket wholesale. Returns whether it existed.
    async fn delete(&self, name: &str) -> Result<bool>;
}

/// In-memory bucket implementation.
#[derive(Default)]
pub struct MemoryCacheBucket {
    entries: RwLock<HashMap<String, HttpResponse>>,
}

#[async_trait]
impl CacheBucket for MemoryCacheBucket {
    async fn lookup(&self, url: &str) -> Result<Option<HttpResponse>> {
        Ok(self.entries.read().await.get(url).cloned())
    }

    async fn store(&self, url: &str, response: HttpResponse) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(url.to_string(), response);
        Ok(())
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

/// In-memory store of named buckets.
///
/// The default backing store for hosts without persistent response storage
/// and for tests. Buckets are created lazily by [`CacheStore::open`].
#[derive(Default)]
pub struct MemoryCacheStore {
    buckets: RwLock<HashMap<String, Arc<MemoryCacheBucket>>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn open(&self, name: &str) -> Result<Arc<dyn CacheBucket>> {
        if name.is_empty() {
            return Err(OfflineError::StoreError(
                "bucket name cannot be empty".to_string(),
            ));
        }

        let mut buckets = self.buckets.write().await;
        let bucket = buckets
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(MemoryCacheBucket::default()));
        Ok(Arc::clone(bucket) as Arc<dyn CacheBucket>)
    }

    async fn keys(&self) -> Result<Vec<String>> {
        Ok(self.buckets.read().await.keys().cloned().collect())
    }

    async fn delete(&self, name: &str) -> Result<bool> {
        Ok(self.buckets.write().await.remove(name).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    fn response(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: HashMap::new(),
            body: Bytes::from(body.to_string()),
        }
    }

    #[tokio::test]
    async fn test_open_creates_bucket() {
        let store = MemoryCacheStore::new();
        store.open("v1").await.unwrap();

        assert_eq!(store.keys().await.unwrap(), vec!["v1".to_string()]);
    }

    #[tokio::test]
    async fn test_open_rejects_empty_name() {
        let store = MemoryCacheStore::new();
        assert!(store.open("").await.is_err());
    }

    #[tokio::test]
    async fn test_lookup_and_store() {
        let store = MemoryCacheStore::new();
        let bucket = store.open("v1").await.unwrap();

        assert!(bucket.lookup("/a").await.unwrap().is_none());

        bucket.store("/a", response("one")).await.unwrap();
        let found = bucket.lookup("/a").await.unwrap().unwrap();
        assert_eq!(found.body, Bytes::from("one"));
    }

    #[tokio::test]
    async fn test_store_overwrites_last_writer_wins() {
        let store = MemoryCacheStore::new();
        let bucket = store.open("v1").await.unwrap();

        bucket.store("/a", response("one")).await.unwrap();
        bucket.store("/a", response("two")).await.unwrap();

        let found = bucket.lookup("/a").await.unwrap().unwrap();
        assert_eq!(found.body, Bytes::from("two"));
        assert_eq!(bucket.len().await, 1);
    }

    #[tokio::test]
    async fn test_delete_bucket() {
        let store = MemoryCacheStore::new();
        store.open("v1").await.unwrap();

        assert!(store.delete("v1").await.unwrap());
        assert!(!store.delete("v1").await.unwrap());
        assert!(store.keys().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reopen_keeps_entries() {
        let store = MemoryCacheStore::new();
        let bucket = store.open("v1").await.unwrap();
        bucket.store("/a", response("one")).await.unwrap();

        let reopened = store.open("v1").await.unwrap();
        assert!(reopened.lookup("/a").await.unwrap().is_some());
    }
}
