mod attachment;
mod error;
mod operations;
mod schema;
mod types;

pub use attachment::{
    object_key, Attachment, ImageType, DEFAULT_EXTENSION, DEFAULT_MAX_UPLOAD_BYTES,
};
pub use error::{IntakeError, SchemaError, ValidationError};
pub use operations::{
    compose_record, select_delete_target, sort_newest_first, validate_submission,
};
pub use schema::{RecordKind, RecordSchema, RESERVED_FIELDS};
pub use types::Record;
