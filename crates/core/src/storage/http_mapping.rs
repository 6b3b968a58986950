//! Pure functions for mapping intake errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`IntakeError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use crate::record::IntakeError;

/// Maps an [`IntakeError`] to an HTTP status code.
///
/// - `Validation` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `AmbiguousIdentifier` -> 409 (Conflict)
/// - `Upload` / `StoreWrite` / `StoreScan` / `StoreDelete` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use recordbox_core::record::IntakeError;
/// use recordbox_core::storage::intake_error_to_status_code;
///
/// let error = IntakeError::NotFound { id: "abc-123".to_string() };
/// assert_eq!(intake_error_to_status_code(&error), 404);
/// ```
pub fn intake_error_to_status_code(error: &IntakeError) -> u16 {
    match error {
        IntakeError::Validation(_) => 400,
        IntakeError::NotFound { .. } => 404,
        IntakeError::AmbiguousIdentifier { .. } => 409,
        IntakeError::Upload(_)
        | IntakeError::StoreWrite(_)
        | IntakeError::StoreScan(_)
        | IntakeError::StoreDelete(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ValidationError;
    use crate::storage::{ObjectStoreError, RepositoryError};

    #[test]
    fn test_validation_maps_to_400() {
        let error = IntakeError::Validation(ValidationError::MissingField("name".to_string()));
        assert_eq!(intake_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = IntakeError::NotFound {
            id: "rec-123".to_string(),
        };
        assert_eq!(intake_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_ambiguous_maps_to_409() {
        let error = IntakeError::AmbiguousIdentifier {
            id: "rec-123".to_string(),
            matches: 3,
        };
        assert_eq!(intake_error_to_status_code(&error), 409);
    }

    #[test]
    fn test_upload_maps_to_500() {
        let error = IntakeError::Upload(ObjectStoreError::ConnectionFailed("dns".to_string()));
        assert_eq!(intake_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_store_errors_map_to_500() {
        let cause = RepositoryError::QueryFailed("throughput exceeded".to_string());
        for error in [
            IntakeError::StoreWrite(cause.clone()),
            IntakeError::StoreScan(cause.clone()),
            IntakeError::StoreDelete(cause),
        ] {
            assert_eq!(intake_error_to_status_code(&error), 500);
        }
    }
}
