//! In-memory record repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use recordbox_core::record::Record;
use recordbox_core::storage::{RecordRepository, RepositoryError, Result};

/// In-memory stand-in for the records table.
///
/// Items are keyed by (identifier, sort-key value) like the DynamoDB table,
/// so two records may share an identifier if their sort keys differ.
#[derive(Debug, Clone)]
pub struct InMemoryRecordRepository {
    sort_key: String,
    records: Arc<RwLock<HashMap<(Uuid, String), Record>>>,
}

impl InMemoryRecordRepository {
    /// Creates an empty repository whose sort key is the `sort_key` field.
    pub fn new(sort_key: impl Into<String>) -> Self {
        Self {
            sort_key: sort_key.into(),
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored items.
    #[cfg(test)]
    pub async fn item_count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn put_record(&self, record: &Record) -> Result<()> {
        let key = (record.id, record.field(&self.sort_key).to_string());
        let mut records = self.records.write().await;
        records.insert(key, record.clone());
        Ok(())
    }

    async fn scan_records(&self) -> Result<Vec<Record>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn scan_records_by_id(&self, id: Uuid) -> Result<Vec<Record>> {
        let records = self.records.read().await;
        Ok(records.values().filter(|r| r.id == id).cloned().collect())
    }

    async fn delete_record(&self, id: Uuid, sort_key: &str) -> Result<()> {
        let mut records = self.records.write().await;
        if records.remove(&(id, sort_key.to_string())).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Record",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}
