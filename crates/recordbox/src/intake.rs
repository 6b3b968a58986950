//! Record intake workflow.
//!
//! Ties the pure rules from `recordbox_core::record` to the storage traits:
//! validate, upload the optional image, compose, persist. Also hosts the
//! list and delete-by-identifier operations.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use recordbox_core::record::{
    compose_record, object_key, select_delete_target, sort_newest_first, validate_submission,
    Attachment, IntakeError, Record, RecordSchema,
};
use recordbox_core::storage::{
    ObjectResult, ObjectStore, RecordRepository, RepositoryError, StoredObject,
};

/// Create, list and delete records against the configured backends.
#[derive(Clone)]
pub struct IntakeService {
    records: Arc<dyn RecordRepository>,
    objects: Arc<dyn ObjectStore>,
    schema: Arc<RecordSchema>,
    max_upload_bytes: usize,
}

impl IntakeService {
    pub fn new(
        records: Arc<dyn RecordRepository>,
        objects: Arc<dyn ObjectStore>,
        schema: RecordSchema,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            records,
            objects,
            schema: Arc::new(schema),
            max_upload_bytes,
        }
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Validates and stores a submission, uploading the image first.
    ///
    /// Nothing is written when validation fails, and the record is not
    /// written when the upload fails.
    pub async fn submit(
        &self,
        fields: BTreeMap<String, String>,
        attachment: Option<Attachment>,
    ) -> Result<Record, IntakeError> {
        let attachment = attachment.filter(|a| !a.is_placeholder());
        let image_type = validate_submission(
            &self.schema,
            &fields,
            attachment.as_ref(),
            self.max_upload_bytes,
        )?;

        let image_url = match (attachment, image_type) {
            (Some(upload), Some(image_type)) => {
                let key = object_key(Uuid::new_v4(), upload.file_name.as_deref());
                let url = self
                    .objects
                    .upload(&key, upload.bytes, image_type.mime_type())
                    .await
                    .map_err(|e| {
                        tracing::error!(object_key = %key, error = %e, "Image upload failed");
                        IntakeError::Upload(e)
                    })?;
                tracing::info!(object_key = %key, url = %url, "Uploaded image");
                url
            }
            _ => String::new(),
        };

        let record = compose_record(&self.schema, Uuid::new_v4(), fields, image_url, Utc::now());

        self.records.put_record(&record).await.map_err(|e| {
            tracing::error!(record_id = %record.id, error = %e, "Failed to store record");
            IntakeError::StoreWrite(e)
        })?;

        tracing::info!(
            record_id = %record.id,
            sort_key = %record.field(self.schema.sort_key()),
            has_image = record.has_image(),
            "Created record"
        );

        Ok(record)
    }

    /// Lists every record, newest first.
    pub async fn list(&self) -> Result<Vec<Record>, IntakeError> {
        let mut records = self
            .records
            .scan_records()
            .await
            .map_err(IntakeError::StoreScan)?;
        sort_newest_first(&mut records);

        tracing::debug!(count = records.len(), "Listed records");
        Ok(records)
    }

    /// Deletes the record with the given identifier.
    ///
    /// Scans for the identifier to discover the sort-key value, then deletes
    /// by the full key. Returns the removed record.
    pub async fn delete(&self, id: &str) -> Result<Record, IntakeError> {
        let not_found = || IntakeError::NotFound { id: id.to_string() };
        let uuid = Uuid::parse_str(id).map_err(|_| not_found())?;

        let matches = self
            .records
            .scan_records_by_id(uuid)
            .await
            .map_err(IntakeError::StoreScan)?;
        let target = select_delete_target(uuid, matches)?;

        self.records
            .delete_record(uuid, target.field(self.schema.sort_key()))
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound { .. } => not_found(),
                other => IntakeError::StoreDelete(other),
            })?;

        tracing::info!(
            record_id = %uuid,
            sort_key = %target.field(self.schema.sort_key()),
            "Deleted record"
        );

        Ok(target)
    }

    /// Reads an uploaded object back from the object store.
    pub async fn fetch_object(&self, key: &str) -> ObjectResult<Option<StoredObject>> {
        self.objects.download(key).await
    }
}
