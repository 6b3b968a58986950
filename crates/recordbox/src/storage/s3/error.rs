//! S3 error mapping.
//!
//! Maps AWS SDK errors to `ObjectStoreError` from `recordbox_core::storage`.

use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::put_object::PutObjectError;
use recordbox_core::storage::ObjectStoreError;

/// Map a PutObject SDK error to ObjectStoreError.
pub fn map_put_object_error<R: std::fmt::Debug + Send + Sync + 'static>(
    err: SdkError<PutObjectError, R>,
    key: &str,
) -> ObjectStoreError {
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            ObjectStoreError::ConnectionFailed("Failed to reach S3".to_string())
        }
        err => ObjectStoreError::UploadFailed {
            key: key.to_string(),
            message: format!("{:?}", err.into_service_error()),
        },
    }
}

/// Map a GetObject SDK error to ObjectStoreError.
///
/// Returns `None` for a missing key so callers can treat it as absent.
pub fn map_get_object_error<R: std::fmt::Debug + Send + Sync + 'static>(
    err: SdkError<GetObjectError, R>,
    key: &str,
) -> Option<ObjectStoreError> {
    match err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => Some(
            ObjectStoreError::ConnectionFailed("Failed to reach S3".to_string()),
        ),
        err => match err.into_service_error() {
            GetObjectError::NoSuchKey(_) => None,
            err => Some(ObjectStoreError::DownloadFailed {
                key: key.to_string(),
                message: format!("{:?}", err),
            }),
        },
    }
}
