mod error;
mod http_mapping;
mod traits;

pub use error::{ObjectResult, ObjectStoreError, RepositoryError, Result};
pub use http_mapping::intake_error_to_status_code;
pub use traits::{ObjectStore, RecordRepository, StoredObject};
