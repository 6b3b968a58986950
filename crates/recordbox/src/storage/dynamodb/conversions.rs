//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and records.
//! These are testable in isolation without DynamoDB access.

use std::collections::{BTreeMap, HashMap};

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use recordbox_core::record::{Record, RESERVED_FIELDS};
use recordbox_core::storage::RepositoryError;
use uuid::Uuid;

pub const ATTR_ID: &str = "id";
pub const ATTR_IMAGE_URL: &str = "imageUrl";
pub const ATTR_CREATED_AT: &str = "createdAt";

/// Attribute some older tables used for the image URL.
const LEGACY_ATTR_IMAGE: &str = "image";

/// Convert a Record to a DynamoDB item.
pub fn record_to_item(record: &Record) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(ATTR_ID.to_string(), AttributeValue::S(record.id.to_string()));
    for (name, value) in &record.fields {
        item.insert(name.clone(), AttributeValue::S(value.clone()));
    }
    item.insert(
        ATTR_IMAGE_URL.to_string(),
        AttributeValue::S(record.image_url.clone()),
    );
    item.insert(
        ATTR_CREATED_AT.to_string(),
        AttributeValue::S(record.created_at.to_rfc3339()),
    );

    item
}

/// Convert a DynamoDB item to a Record.
///
/// Every string or number attribute that is not reserved becomes a field.
/// Items written before `createdAt` existed sort as the Unix epoch.
pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<Record, RepositoryError> {
    let id = get_string(item, ATTR_ID)?;
    let id = Uuid::parse_str(&id)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid UUID '{id}': {e}")))?;

    let image_url = get_optional_string(item, ATTR_IMAGE_URL)
        .or_else(|| get_optional_string(item, LEGACY_ATTR_IMAGE))
        .unwrap_or_default();

    let created_at = match get_optional_string(item, ATTR_CREATED_AT) {
        Some(value) => parse_datetime(&value)?,
        None => DateTime::<Utc>::default(),
    };

    let fields: BTreeMap<String, String> = item
        .iter()
        .filter(|(name, _)| !RESERVED_FIELDS.contains(&name.as_str()))
        .filter_map(|(name, value)| scalar_to_string(value).map(|v| (name.clone(), v)))
        .collect();

    Ok(Record {
        id,
        fields,
        image_url,
        created_at,
    })
}

fn scalar_to_string(value: &AttributeValue) -> Option<String> {
    match value {
        AttributeValue::S(s) | AttributeValue::N(s) => Some(s.clone()),
        _ => None,
    }
}

fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing field: {key}")))
}

fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key).and_then(|v| v.as_s().ok()).cloned()
}

fn parse_datetime(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid datetime '{value}': {e}")))
}
