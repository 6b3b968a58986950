//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of `RecordRepository`
//! using `aws-sdk-dynamodb`. The table is keyed by `id` (HASH) and the
//! schema's sort-key field (RANGE).

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRecordRepository;
