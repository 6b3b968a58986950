use async_trait::async_trait;
use uuid::Uuid;

use crate::record::Record;

use super::{ObjectResult, Result};

/// Repository for records in the key-value table.
///
/// Items are keyed by (identifier, sort-key value); the repository knows
/// which attribute holds the sort key.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Writes a record, replacing any item with the same composite key.
    async fn put_record(&self, record: &Record) -> Result<()>;

    /// Returns every record in a single, unpaginated scan.
    async fn scan_records(&self) -> Result<Vec<Record>>;

    /// Scans for records whose identifier equals `id`.
    async fn scan_records_by_id(&self, id: Uuid) -> Result<Vec<Record>>;

    /// Deletes the item with the given composite key.
    ///
    /// Returns `RepositoryError::NotFound` when no such item exists.
    async fn delete_record(&self, id: Uuid, sort_key: &str) -> Result<()>;
}

/// An object read back from the object store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Object storage for uploaded images.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Stores `bytes` under `key` with public-read visibility and returns the
    /// publicly resolvable URL.
    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> ObjectResult<String>;

    /// Reads an object back, `None` when the key does not exist.
    async fn download(&self, key: &str) -> ObjectResult<Option<StoredObject>>;
}
