use std::env;

use recordbox_core::record::{RecordKind, RecordSchema, SchemaError, DEFAULT_MAX_UPLOAD_BYTES};
use thiserror::Error;

/// Errors raised while reading configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid record schema: {0}")]
    Schema(#[from] SchemaError),
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
///
/// Built once in `main` and handed to the storage backends; nothing reads
/// the environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table holding the records (default: "recordbox")
    #[cfg_attr(not(feature = "aws"), allow(dead_code))]
    pub table_name: String,
    /// S3 bucket receiving uploaded images (default: "recordbox")
    #[cfg_attr(not(feature = "aws"), allow(dead_code))]
    pub bucket_name: String,
    /// Custom AWS endpoint, e.g. LocalStack (default: unset)
    #[cfg_attr(not(feature = "aws"), allow(dead_code))]
    pub endpoint_url: Option<String>,
    /// Attachment size limit in bytes (default: 1 MiB)
    pub max_upload_bytes: usize,
    /// Text fields a record carries (default: the `paper` preset)
    pub schema: RecordSchema,
    /// Base URL for images kept by the in-memory object store (default: "/uploads")
    #[cfg_attr(not(feature = "inmemory"), allow(dead_code))]
    pub public_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_TABLE` (or `DYNAMO_TABLE`) - Table name (default: "recordbox")
    /// - `S3_BUCKET_NAME` - Bucket name (default: "recordbox")
    /// - `AWS_ENDPOINT_URL` - Custom endpoint for DynamoDB and S3
    /// - `MAX_UPLOAD_BYTES` - Attachment size limit (default: 1048576)
    /// - `RECORD_KIND` - Schema preset: course, paper, product (default: paper)
    /// - `RECORD_FIELDS` - Comma-separated field list, overrides `RECORD_KIND`
    /// - `PUBLIC_BASE_URL` - Base of in-memory image URLs (default: "/uploads")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let max_upload_bytes = match non_empty("MAX_UPLOAD_BYTES") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "MAX_UPLOAD_BYTES",
                    value,
                })?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let schema = match (non_empty("RECORD_FIELDS"), non_empty("RECORD_KIND")) {
            (Some(fields), _) => RecordSchema::parse_list(&fields)?,
            (None, Some(kind)) => RecordSchema::preset(kind.parse::<RecordKind>()?),
            (None, None) => RecordSchema::default(),
        };

        Ok(Self {
            table_name: non_empty("DYNAMODB_TABLE")
                .or_else(|| non_empty("DYNAMO_TABLE"))
                .unwrap_or_else(|| "recordbox".to_string()),
            bucket_name: non_empty("S3_BUCKET_NAME").unwrap_or_else(|| "recordbox".to_string()),
            endpoint_url: non_empty("AWS_ENDPOINT_URL"),
            max_upload_bytes,
            schema,
            public_base_url: non_empty("PUBLIC_BASE_URL")
                .unwrap_or_else(|| "/uploads".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_name: "recordbox".to_string(),
            bucket_name: "recordbox".to_string(),
            endpoint_url: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            schema: RecordSchema::default(),
            public_base_url: "/uploads".to_string(),
        }
    }
}
