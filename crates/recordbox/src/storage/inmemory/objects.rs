//! In-memory object store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use recordbox_core::storage::{ObjectResult, ObjectStore, StoredObject};

/// In-memory stand-in for the image bucket.
///
/// Returned URLs are `{base_url}/{key}`; the server's `/uploads` route
/// serves them back.
#[derive(Debug, Clone)]
pub struct InMemoryObjectStore {
    base_url: String,
    objects: Arc<RwLock<HashMap<String, StoredObject>>>,
}

impl InMemoryObjectStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            objects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Keys of every stored object.
    #[cfg(test)]
    pub async fn keys(&self) -> Vec<String> {
        self.objects.read().await.keys().cloned().collect()
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> ObjectResult<String> {
        let object = StoredObject {
            content_type: content_type.to_string(),
            bytes,
        };
        self.objects.write().await.insert(key.to_string(), object);
        Ok(format!("{}/{}", self.base_url, key))
    }

    async fn download(&self, key: &str) -> ObjectResult<Option<StoredObject>> {
        Ok(self.objects.read().await.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upload_returns_url_under_base() {
        let store = InMemoryObjectStore::new("http://localhost:3000/uploads/");

        let url = store.upload("a.png", vec![1, 2], "image/png").await.unwrap();

        assert_eq!(url, "http://localhost:3000/uploads/a.png");
    }

    #[tokio::test]
    async fn test_download_round_trip() {
        let store = InMemoryObjectStore::new("/uploads");
        store.upload("a.png", vec![1, 2], "image/png").await.unwrap();

        let object = store.download("a.png").await.unwrap().unwrap();
        assert_eq!(object.bytes, vec![1, 2]);
        assert_eq!(object.content_type, "image/png");

        assert_eq!(store.download("missing.png").await.unwrap(), None);
    }
}
