//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `RecordRepository`
//! and `ObjectStore` traits defined in `recordbox_core::storage`. The
//! implementations are selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): HashMap-backed table and object store
//! - `aws`: DynamoDB table (`aws-sdk-dynamodb`) and S3 bucket (`aws-sdk-s3`)
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time. The in-memory backend is always compiled for tests.
//!
//! # Examples
//!
//! Build with the in-memory backend (default):
//! ```bash
//! cargo build -p recordbox
//! ```
//!
//! Build with DynamoDB and S3:
//! ```bash
//! cargo build -p recordbox --no-default-features --features aws
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "aws"))]
compile_error!(
    "Features 'inmemory' and 'aws' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "aws")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'aws' feature. \
    Example: cargo build -p recordbox --features aws"
);

#[cfg(feature = "aws")]
pub mod dynamodb;

#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "aws")]
pub mod s3;

#[cfg(feature = "aws")]
pub use dynamodb::DynamoDbRecordRepository;

#[cfg(any(feature = "inmemory", test))]
pub use inmemory::{InMemoryObjectStore, InMemoryRecordRepository};

#[cfg(feature = "aws")]
pub use s3::S3ObjectStore;

/// Loads the shared AWS configuration from the default provider chain,
/// optionally pointing every client at a custom endpoint.
#[cfg(feature = "aws")]
pub async fn load_aws_config(endpoint_url: Option<&str>) -> aws_config::SdkConfig {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(endpoint) = endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }
    loader.load().await
}
