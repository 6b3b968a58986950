use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{Attachment, ImageType, IntakeError, Record, RecordSchema, ValidationError};

/// Validates a submission before any storage call is made.
///
/// The attachment is checked first, then the sort-key field. Returns the
/// detected image type when an attachment is present.
pub fn validate_submission(
    schema: &RecordSchema,
    fields: &BTreeMap<String, String>,
    attachment: Option<&Attachment>,
    max_upload_bytes: usize,
) -> Result<Option<ImageType>, ValidationError> {
    let image_type = attachment
        .map(|a| a.validate(max_upload_bytes))
        .transpose()?;

    let sort_key = schema.sort_key();
    let has_sort_key = fields
        .get(sort_key)
        .is_some_and(|value| !value.trim().is_empty());
    if !has_sort_key {
        return Err(ValidationError::MissingField(sort_key.to_string()));
    }

    Ok(image_type)
}

/// Composes the record to persist from the submitted text fields.
///
/// Fields outside the schema are dropped, including any client-supplied `id`.
pub fn compose_record(
    schema: &RecordSchema,
    id: Uuid,
    fields: BTreeMap<String, String>,
    image_url: String,
    created_at: DateTime<Utc>,
) -> Record {
    let fields = fields
        .into_iter()
        .filter(|(name, _)| schema.contains(name))
        .collect();

    Record {
        id,
        fields,
        image_url,
        created_at,
    }
}

/// Picks the single record a delete-by-identifier scan should remove.
///
/// Zero matches is a not-found; more than one is rejected rather than
/// guessing which item to drop.
pub fn select_delete_target(id: Uuid, mut matches: Vec<Record>) -> Result<Record, IntakeError> {
    match matches.len() {
        0 => Err(IntakeError::NotFound { id: id.to_string() }),
        1 => Ok(matches.remove(0)),
        n => Err(IntakeError::AmbiguousIdentifier {
            id: id.to_string(),
            matches: n,
        }),
    }
}

/// Orders records newest first, breaking ties by identifier.
pub fn sort_newest_first(records: &mut [Record]) {
    records.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn record_at(id: u128, second: u32) -> Record {
        Record {
            id: Uuid::from_u128(id),
            fields: fields(&[("name", "n")]),
            image_url: String::new(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, second).unwrap(),
        }
    }

    fn png() -> Attachment {
        Attachment {
            file_name: Some("a.png".to_string()),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_validate_without_attachment() {
        let schema = RecordSchema::default();
        let result = validate_submission(&schema, &fields(&[("name", "Algorithms")]), None, 1024);

        assert_eq!(result, Ok(None));
    }

    #[test]
    fn test_validate_with_attachment() {
        let schema = RecordSchema::default();
        let result = validate_submission(
            &schema,
            &fields(&[("name", "Algorithms")]),
            Some(&png()),
            1024,
        );

        assert_eq!(result, Ok(Some(ImageType::Png)));
    }

    #[test]
    fn test_validate_checks_file_type_first() {
        let schema = RecordSchema::default();
        let mut upload = png();
        upload.content_type = "image/gif".to_string();

        let result = validate_submission(&schema, &BTreeMap::new(), Some(&upload), 1024);

        assert_eq!(
            result,
            Err(ValidationError::UnsupportedFileType("image/gif".to_string()))
        );
    }

    #[test]
    fn test_validate_requires_sort_key() {
        let schema = RecordSchema::default();
        let result = validate_submission(&schema, &fields(&[("name", "  ")]), None, 1024);

        assert_eq!(result, Err(ValidationError::MissingField("name".to_string())));
    }

    #[test]
    fn test_compose_drops_unknown_fields() {
        let schema = RecordSchema::parse_list("name,author").unwrap();
        let id = Uuid::new_v4();
        let now = Utc::now();

        let record = compose_record(
            &schema,
            id,
            fields(&[("name", "Algorithms"), ("author", "X"), ("id", "client-id")]),
            String::new(),
            now,
        );

        assert_eq!(record.id, id);
        assert_eq!(record.fields, fields(&[("name", "Algorithms"), ("author", "X")]));
        assert_eq!(record.image_url, "");
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_select_delete_target_none() {
        let id = Uuid::from_u128(7);
        assert_eq!(
            select_delete_target(id, Vec::new()),
            Err(IntakeError::NotFound { id: id.to_string() })
        );
    }

    #[test]
    fn test_select_delete_target_single() {
        let record = record_at(7, 0);
        assert_eq!(
            select_delete_target(record.id, vec![record.clone()]),
            Ok(record)
        );
    }

    #[test]
    fn test_select_delete_target_rejects_multiple() {
        let id = Uuid::from_u128(7);
        let result = select_delete_target(id, vec![record_at(7, 0), record_at(7, 1)]);

        assert_eq!(
            result,
            Err(IntakeError::AmbiguousIdentifier {
                id: id.to_string(),
                matches: 2
            })
        );
    }

    #[test]
    fn test_sort_newest_first() {
        let mut records = vec![record_at(1, 0), record_at(2, 30), record_at(3, 15)];
        sort_newest_first(&mut records);

        let ids: Vec<u128> = records.iter().map(|r| r.id.as_u128()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
