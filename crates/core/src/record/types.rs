use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-submitted record as it lives in the key-value store.
///
/// Schema fields are kept flat next to the fixed attributes, so the JSON
/// shape matches the stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
    /// Public URL of the uploaded image, empty when none was attached.
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Returns the value of a schema field, or an empty string when absent.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }

    /// Whether an image was uploaded alongside this record.
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record {
            id: Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap(),
            fields: BTreeMap::from([
                ("name".to_string(), "Algorithms".to_string()),
                ("author".to_string(), "X".to_string()),
            ]),
            image_url: String::new(),
            created_at: DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn test_field_returns_value_or_empty() {
        let record = sample_record();

        assert_eq!(record.field("name"), "Algorithms");
        assert_eq!(record.field("isbn"), "");
    }

    #[test]
    fn test_has_image() {
        let mut record = sample_record();
        assert!(!record.has_image());

        record.image_url = "https://bucket.s3.us-east-1.amazonaws.com/a.png".to_string();
        assert!(record.has_image());
    }

    #[test]
    fn test_json_shape_is_flat() {
        let json = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(json["id"], "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(json["name"], "Algorithms");
        assert_eq!(json["author"], "X");
        assert_eq!(json["imageUrl"], "");
        assert_eq!(json["createdAt"], "2024-01-15T10:30:00Z");
    }
}
