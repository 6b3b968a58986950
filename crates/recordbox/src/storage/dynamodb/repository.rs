//! DynamoDB repository implementation.
//!
//! Implements `RecordRepository` from `recordbox_core::storage` using DynamoDB.

use std::collections::HashMap;
use std::future::Future;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use uuid::Uuid;

use recordbox_core::record::Record;
use recordbox_core::storage::{RecordRepository, RepositoryError, Result};

use super::conversions::{item_to_record, record_to_item, ATTR_ID};
use super::error::{map_delete_item_error, map_put_item_error, map_scan_error};

type Item = HashMap<String, AttributeValue>;

/// One scan page: its items and the key to resume from, if any.
type ScanPage = (Option<Vec<Item>>, Option<Item>);

/// Follows `LastEvaluatedKey` until the scan is exhausted.
///
/// Filter expressions apply per page, so matching items can sit on any page.
async fn collect_pages<F, Fut>(mut fetch_page: F) -> Result<Vec<Item>>
where
    F: FnMut(Option<Item>) -> Fut,
    Fut: Future<Output = Result<ScanPage>>,
{
    let mut items = Vec::new();
    let mut start_key = None;

    loop {
        let (page_items, last_key) = fetch_page(start_key.take()).await?;
        items.extend(page_items.unwrap_or_default());

        match last_key {
            Some(key) if !key.is_empty() => start_key = Some(key),
            _ => return Ok(items),
        }
    }
}

/// DynamoDB-based record repository.
///
/// The table's composite key is (`id`, `sort_key`), where `sort_key` is the
/// name of the schema's first field.
pub struct DynamoDbRecordRepository {
    client: Client,
    table_name: String,
    sort_key: String,
}

impl DynamoDbRecordRepository {
    /// Creates a new repository with the given DynamoDB client, table name,
    /// and sort-key attribute.
    pub fn new(client: Client, table_name: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            sort_key: sort_key.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Converts scanned items, skipping ones that are not records of ours
    /// (e.g. rows with a non-UUID identifier).
    fn collect_records(&self, items: Option<Vec<HashMap<String, AttributeValue>>>) -> Vec<Record> {
        items
            .unwrap_or_default()
            .iter()
            .filter_map(|item| match item_to_record(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(
                        table = %self.table_name,
                        error = %e,
                        "Skipping unreadable item"
                    );
                    None
                }
            })
            .collect()
    }
}

#[async_trait]
impl RecordRepository for DynamoDbRecordRepository {
    async fn put_record(&self, record: &Record) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(record_to_item(record)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn scan_records(&self) -> Result<Vec<Record>> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(map_scan_error)?;

        if result.last_evaluated_key.is_some() {
            tracing::warn!(table = %self.table_name, "Scan truncated at one page");
        }

        Ok(self.collect_records(result.items))
    }

    async fn scan_records_by_id(&self, id: Uuid) -> Result<Vec<Record>> {
        let items = collect_pages(|start_key| async move {
            let page = self
                .client
                .scan()
                .table_name(&self.table_name)
                .filter_expression("#id = :id")
                .expression_attribute_names("#id", ATTR_ID)
                .expression_attribute_values(":id", AttributeValue::S(id.to_string()))
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;
            Ok::<_, RepositoryError>((page.items, page.last_evaluated_key))
        })
        .await?;

        Ok(self.collect_records(Some(items)))
    }

    async fn delete_record(&self, id: Uuid, sort_key: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(ATTR_ID, AttributeValue::S(id.to_string()))
            .key(&self.sort_key, AttributeValue::S(sort_key.to_string()))
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#id", ATTR_ID)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, id.to_string()))?;

        Ok(())
    }
}
