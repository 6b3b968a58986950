use thiserror::Error;

use crate::storage::{ObjectStoreError, RepositoryError};

/// Reasons a submission is rejected before anything is stored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unsupported file type: {0} (allowed: png, jpg, jpeg)")]
    UnsupportedFileType(String),
    #[error("File too large: {size} bytes (limit: {limit} bytes)")]
    FileTooLarge { size: usize, limit: usize },
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Errors that can occur when building a record schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Record schema must have at least one field")]
    Empty,
    #[error("Field name is reserved: {0}")]
    Reserved(String),
    #[error("Duplicate field name: {0}")]
    Duplicate(String),
    #[error("Unknown record kind: {0} (expected course, paper or product)")]
    UnknownKind(String),
}

/// Errors surfaced by the intake workflow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Upload failed: {0}")]
    Upload(#[source] ObjectStoreError),
    #[error("Store write failed: {0}")]
    StoreWrite(#[source] RepositoryError),
    #[error("Store scan failed: {0}")]
    StoreScan(#[source] RepositoryError),
    #[error("Store delete failed: {0}")]
    StoreDelete(#[source] RepositoryError),
    #[error("Record not found: {id}")]
    NotFound { id: String },
    #[error("Identifier {id} matches {matches} records")]
    AmbiguousIdentifier { id: String, matches: usize },
}
