//! S3 object store implementation.
//!
//! Uploads images with a public-read ACL using `aws-sdk-s3` and hands back
//! the URL the object can be fetched from.

mod error;
mod store;

pub use store::{public_url_base, S3ObjectStore};
