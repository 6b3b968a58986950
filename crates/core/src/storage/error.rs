use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Errors that can occur during object store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectStoreError {
    #[error("Upload of {key} failed: {message}")]
    UploadFailed { key: String, message: String },
    #[error("Download of {key} failed: {message}")]
    DownloadFailed { key: String, message: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Result type for object store operations.
pub type ObjectResult<T> = std::result::Result<T, ObjectStoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Record",
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Record not found: abc-123");
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("timeout after 30s".to_string());
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("Table not found".to_string());
        assert_eq!(error.to_string(), "Query failed: Table not found");
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("Missing field: name".to_string());
        assert_eq!(error.to_string(), "Invalid data: Missing field: name");
    }

    #[test]
    fn test_object_store_upload_failed_display() {
        let error = ObjectStoreError::UploadFailed {
            key: "a.png".to_string(),
            message: "AccessDenied".to_string(),
        };
        assert_eq!(error.to_string(), "Upload of a.png failed: AccessDenied");
    }
}
