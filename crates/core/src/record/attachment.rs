use std::path::Path;

use uuid::Uuid;

use super::ValidationError;

/// Extension appended to object keys when the upload has none.
pub const DEFAULT_EXTENSION: &str = ".jpg";

/// Default attachment size limit (1 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 1024 * 1024;

/// Image formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Png,
    Jpg,
    Jpeg,
}

impl ImageType {
    /// Matches a declared content type against the allow-list.
    ///
    /// Comparison ignores case and any `; charset=...` style parameters.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "image/png" => Some(ImageType::Png),
            "image/jpg" => Some(ImageType::Jpg),
            "image/jpeg" => Some(ImageType::Jpeg),
            _ => None,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ImageType::Png => "image/png",
            ImageType::Jpg => "image/jpg",
            ImageType::Jpeg => "image/jpeg",
        }
    }
}

/// A file submitted in the `image` field of the create form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: Option<String>,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Browsers send an empty file part when no file was chosen.
    pub fn is_placeholder(&self) -> bool {
        self.bytes.is_empty() && self.file_name.as_deref().is_none_or(str::is_empty)
    }

    /// Checks the declared type and size of the upload.
    pub fn validate(&self, max_bytes: usize) -> Result<ImageType, ValidationError> {
        let image_type = ImageType::from_content_type(&self.content_type)
            .ok_or_else(|| ValidationError::UnsupportedFileType(self.content_type.clone()))?;

        if self.bytes.len() > max_bytes {
            return Err(ValidationError::FileTooLarge {
                size: self.bytes.len(),
                limit: max_bytes,
            });
        }

        Ok(image_type)
    }
}

/// Builds the object-store key for an upload: the token plus the original
/// file's extension, or [`DEFAULT_EXTENSION`] when it has none.
///
/// Extensions that are not plain ASCII alphanumerics fall back to the
/// default so keys stay URL-safe.
pub fn object_key(token: Uuid, file_name: Option<&str>) -> String {
    let extension = file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()));

    format!(
        "{token}{}",
        extension.as_deref().unwrap_or(DEFAULT_EXTENSION)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attachment(content_type: &str, bytes: &[u8]) -> Attachment {
        Attachment {
            file_name: Some("cover.png".to_string()),
            content_type: content_type.to_string(),
            bytes: bytes.to_vec(),
        }
    }

    fn token() -> Uuid {
        Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap()
    }

    #[test]
    fn test_allowed_content_types() {
        assert_eq!(ImageType::from_content_type("image/png"), Some(ImageType::Png));
        assert_eq!(ImageType::from_content_type("image/jpg"), Some(ImageType::Jpg));
        assert_eq!(
            ImageType::from_content_type("IMAGE/JPEG; charset=binary"),
            Some(ImageType::Jpeg)
        );
    }

    #[test]
    fn test_rejected_content_types() {
        for content_type in ["image/gif", "images/jpeg", "application/pdf", "", "text/plain"] {
            assert_eq!(ImageType::from_content_type(content_type), None);
        }
    }

    #[test]
    fn test_validate_accepts_small_png() {
        let upload = attachment("image/png", b"\x89PNG");
        assert_eq!(upload.validate(1024), Ok(ImageType::Png));
    }

    #[test]
    fn test_validate_rejects_wrong_type_before_size() {
        let upload = attachment("application/pdf", &[0; 16]);
        assert_eq!(
            upload.validate(8),
            Err(ValidationError::UnsupportedFileType(
                "application/pdf".to_string()
            ))
        );
    }

    #[test]
    fn test_validate_rejects_oversized_file() {
        let upload = attachment("image/jpeg", &[0; 16]);
        assert_eq!(
            upload.validate(8),
            Err(ValidationError::FileTooLarge { size: 16, limit: 8 })
        );
    }

    #[test]
    fn test_placeholder_detection() {
        let empty = Attachment {
            file_name: Some(String::new()),
            content_type: "application/octet-stream".to_string(),
            bytes: Vec::new(),
        };
        assert!(empty.is_placeholder());
        assert!(!attachment("image/png", b"x").is_placeholder());
    }

    #[test]
    fn test_object_key_keeps_extension() {
        assert_eq!(
            object_key(token(), Some("Cover.PNG")),
            "550e8400-e29b-41d4-a716-446655440000.png"
        );
    }

    #[test]
    fn test_object_key_defaults_to_jpg() {
        for name in [None, Some("photo"), Some(".hidden"), Some("odd.p%g")] {
            assert_eq!(
                object_key(token(), name),
                "550e8400-e29b-41d4-a716-446655440000.jpg"
            );
        }
    }
}
