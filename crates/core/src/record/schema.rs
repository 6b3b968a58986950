use std::str::FromStr;

use super::SchemaError;

/// Names a schema may not use: the record's own bookkeeping attributes plus
/// `image`, which is both the form's file field and a legacy URL attribute.
pub const RESERVED_FIELDS: [&str; 4] = ["id", "imageUrl", "createdAt", "image"];

/// Built-in field sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordKind {
    Course,
    #[default]
    Paper,
    Product,
}

impl RecordKind {
    /// Ordered field names; the first one is the sort key.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            RecordKind::Course => &["name", "type", "semester", "department"],
            RecordKind::Paper => &["name", "author", "isbn", "page", "year"],
            RecordKind::Product => &["name", "type", "price"],
        }
    }
}

impl FromStr for RecordKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "course" => Ok(RecordKind::Course),
            "paper" => Ok(RecordKind::Paper),
            "product" => Ok(RecordKind::Product),
            other => Err(SchemaError::UnknownKind(other.to_string())),
        }
    }
}

/// Ordered list of the text fields a record carries.
///
/// The first field doubles as the store's sort key, so it is required on
/// every submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    fields: Vec<String>,
}

impl RecordSchema {
    /// Creates a schema, rejecting empty, duplicate, or reserved names.
    pub fn new<I, S>(fields: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for field in fields {
            let name = field.into().trim().to_string();
            if name.is_empty() {
                continue;
            }
            if RESERVED_FIELDS.contains(&name.as_str()) {
                return Err(SchemaError::Reserved(name));
            }
            if names.contains(&name) {
                return Err(SchemaError::Duplicate(name));
            }
            names.push(name);
        }

        if names.is_empty() {
            return Err(SchemaError::Empty);
        }
        Ok(Self { fields: names })
    }

    /// Parses a comma-separated field list such as `name,author,isbn`.
    pub fn parse_list(list: &str) -> Result<Self, SchemaError> {
        Self::new(list.split(','))
    }

    pub fn preset(kind: RecordKind) -> Self {
        Self {
            fields: kind.fields().iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Name of the field used as the store's sort key.
    pub fn sort_key(&self) -> &str {
        &self.fields[0]
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }
}

impl Default for RecordSchema {
    fn default() -> Self {
        Self::preset(RecordKind::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_use_name_as_sort_key() {
        for kind in [RecordKind::Course, RecordKind::Paper, RecordKind::Product] {
            assert_eq!(RecordSchema::preset(kind).sort_key(), "name");
        }
    }

    #[test]
    fn test_kind_from_str_is_case_insensitive() {
        assert_eq!("Course".parse::<RecordKind>().unwrap(), RecordKind::Course);
        assert_eq!(" product ".parse::<RecordKind>().unwrap(), RecordKind::Product);
        assert_eq!(
            "book".parse::<RecordKind>(),
            Err(SchemaError::UnknownKind("book".to_string()))
        );
    }

    #[test]
    fn test_parse_list_trims_and_skips_blanks() {
        let schema = RecordSchema::parse_list(" title , author,,isbn ").unwrap();

        assert_eq!(schema.fields(), ["title", "author", "isbn"]);
        assert_eq!(schema.sort_key(), "title");
        assert!(schema.contains("author"));
        assert!(!schema.contains("year"));
    }

    #[test]
    fn test_empty_schema_is_rejected() {
        assert_eq!(RecordSchema::parse_list(" , "), Err(SchemaError::Empty));
    }

    #[test]
    fn test_reserved_field_is_rejected() {
        assert_eq!(
            RecordSchema::parse_list("name,imageUrl"),
            Err(SchemaError::Reserved("imageUrl".to_string()))
        );
    }

    #[test]
    fn test_image_field_name_is_rejected() {
        assert_eq!(
            RecordSchema::parse_list("name,image"),
            Err(SchemaError::Reserved("image".to_string()))
        );
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        assert_eq!(
            RecordSchema::parse_list("name,type,name"),
            Err(SchemaError::Duplicate("name".to_string()))
        );
    }

    #[test]
    fn test_default_is_paper() {
        assert_eq!(
            RecordSchema::default(),
            RecordSchema::preset(RecordKind::Paper)
        );
    }
}
