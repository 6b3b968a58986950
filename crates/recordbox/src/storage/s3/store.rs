use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;

use recordbox_core::storage::{ObjectResult, ObjectStore, ObjectStoreError, StoredObject};

use super::error::{map_get_object_error, map_put_object_error};

/// Returns the URL prefix objects in `bucket` are publicly reachable under.
///
/// With a custom endpoint (LocalStack, MinIO) objects are addressed
/// path-style; otherwise the virtual-hosted AWS form is used.
pub fn public_url_base(bucket: &str, region: Option<&str>, endpoint_url: Option<&str>) -> String {
    match (endpoint_url, region) {
        (Some(endpoint), _) => format!("{}/{bucket}", endpoint.trim_end_matches('/')),
        (None, Some(region)) => format!("https://{bucket}.s3.{region}.amazonaws.com"),
        (None, None) => format!("https://{bucket}.s3.amazonaws.com"),
    }
}

/// S3-backed object store for uploaded images.
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    url_base: String,
}

impl S3ObjectStore {
    /// Creates a store from shared AWS configuration.
    ///
    /// Path-style addressing is forced when a custom endpoint is set so the
    /// bucket does not have to resolve as a subdomain.
    pub fn new(
        sdk_config: &aws_config::SdkConfig,
        bucket: impl Into<String>,
        endpoint_url: Option<&str>,
    ) -> Self {
        let bucket = bucket.into();
        let s3_config = aws_sdk_s3::config::Builder::from(sdk_config)
            .force_path_style(endpoint_url.is_some())
            .build();
        let region = sdk_config.region().map(|r| r.as_ref().to_string());

        Self {
            client: Client::from_conf(s3_config),
            url_base: public_url_base(&bucket, region.as_deref(), endpoint_url),
            bucket,
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> ObjectResult<String> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .acl(ObjectCannedAcl::PublicRead)
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| map_put_object_error(e, key))?;

        Ok(format!("{}/{}", self.url_base, key))
    }

    async fn download(&self, key: &str) -> ObjectResult<Option<StoredObject>> {
        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(e) => return map_get_object_error(e, key).map_or(Ok(None), Err),
        };

        let content_type = output
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = output
            .body
            .collect()
            .await
            .map_err(|e| ObjectStoreError::DownloadFailed {
                key: key.to_string(),
                message: e.to_string(),
            })?
            .into_bytes();

        Ok(Some(StoredObject {
            content_type,
            bytes: bytes.to_vec(),
        }))
    }
}
