//! Application state with trait-object storage.
//!
//! The state wraps one [`IntakeService`] built from whichever backend the
//! enabled feature selects. Handlers only see the service.

use std::sync::Arc;

use crate::config::Config;
use crate::intake::IntakeService;

/// Shared application state.
///
/// Cloned for every request; the service holds its backends behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub intake: IntakeService,
}

impl AppState {
    pub fn from_service(intake: IntakeService) -> Self {
        Self { intake }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::{InMemoryObjectStore, InMemoryRecordRepository};

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for development without any AWS account.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let records = Arc::new(InMemoryRecordRepository::new(config.schema.sort_key()));
            let objects = Arc::new(InMemoryObjectStore::new(config.public_base_url.clone()));

            tracing::info!(
                sort_key = %config.schema.sort_key(),
                public_base_url = %config.public_base_url,
                "Using in-memory storage"
            );

            Ok(Self::from_service(IntakeService::new(
                records,
                objects,
                config.schema.clone(),
                config.max_upload_bytes,
            )))
        }
    }
}

#[cfg(feature = "aws")]
mod aws_backend {
    use super::*;
    use crate::storage::{load_aws_config, DynamoDbRecordRepository, S3ObjectStore};

    impl AppState {
        /// Creates AppState with a DynamoDB table and an S3 bucket.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = load_aws_config(config.endpoint_url.as_deref()).await;

            let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
            let records = Arc::new(DynamoDbRecordRepository::new(
                dynamodb_client,
                config.table_name.clone(),
                config.schema.sort_key(),
            ));
            let objects = Arc::new(S3ObjectStore::new(
                &aws_config,
                config.bucket_name.clone(),
                config.endpoint_url.as_deref(),
            ));

            tracing::info!(
                table = %records.table_name(),
                bucket = %objects.bucket(),
                endpoint = ?config.endpoint_url,
                "Using DynamoDB and S3 storage"
            );

            Ok(Self::from_service(IntakeService::new(
                records,
                objects,
                config.schema.clone(),
                config.max_upload_bytes,
            )))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
