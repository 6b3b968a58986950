//! Record handlers: multipart create, delete-by-identifier, JSON listing and
//! uploaded-image serving.

use std::collections::BTreeMap;

use axum::{
    extract::{
        multipart::{Multipart, MultipartError},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};

use recordbox_core::record::{Attachment, IntakeError, Record};

use crate::{
    handlers::{
        flash::{redirect_with_flash, FlashMessage},
        AppError,
    },
    state::AppState,
};

/// Form field carrying the optional image file.
pub const IMAGE_FIELD: &str = "image";

/// Text fields and optional file read from a multipart form.
#[derive(Debug, Default)]
struct Submission {
    fields: BTreeMap<String, String>,
    attachment: Option<Attachment>,
}

/// Reads every part of the form. Parts other than [`IMAGE_FIELD`] are text
/// fields; a repeated name keeps the last value.
async fn read_submission(mut multipart: Multipart) -> Result<Submission, MultipartError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == IMAGE_FIELD {
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().unwrap_or_default().to_string();
            let bytes = field.bytes().await?.to_vec();
            submission.attachment = Some(Attachment {
                file_name,
                content_type,
                bytes,
            });
        } else {
            let value = field.text().await?;
            submission.fields.insert(name, value);
        }
    }

    Ok(submission)
}

// ============================================================================
// Create Record
// ============================================================================

/// Create a record from a multipart form (POST /create, POST /add).
///
/// Success and validation failures redirect to `/` with a flash message;
/// upload and store failures are opaque 500s.
pub async fn create_record(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let submission = match read_submission(multipart).await {
        Ok(submission) => submission,
        Err(err) if err.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::warn!(error = %err, "Upload exceeded body limit");
            let message = format!(
                "File too large (limit {} bytes)",
                state.intake.max_upload_bytes()
            );
            return Ok(redirect_with_flash("/", FlashMessage::error(message)));
        }
        Err(err) => {
            tracing::warn!(error = %err, "Malformed multipart form");
            return Ok((err.status(), err.body_text()).into_response());
        }
    };

    match state
        .intake
        .submit(submission.fields, submission.attachment)
        .await
    {
        Ok(record) => {
            let sort_key = state.intake.schema().sort_key();
            let message = format!("Created \"{}\"", record.field(sort_key));
            Ok(redirect_with_flash("/", FlashMessage::success(message)))
        }
        Err(IntakeError::Validation(err)) => {
            tracing::warn!(error = %err, "Rejected submission");
            Ok(redirect_with_flash("/", FlashMessage::error(err.to_string())))
        }
        Err(err) => Err(err.into()),
    }
}

// ============================================================================
// Delete Record
// ============================================================================

/// Delete a record by identifier (GET /delete/{id}).
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    state.intake.delete(&id).await?;
    Ok(Redirect::to("/"))
}

// ============================================================================
// API
// ============================================================================

/// List every record as JSON, newest first (GET /api/records).
pub async fn list_records(State(state): State<AppState>) -> Result<Json<Vec<Record>>, AppError> {
    let records = state.intake.list().await?;
    Ok(Json(records))
}

/// Serve an uploaded image back (GET /uploads/{key}).
pub async fn serve_upload(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, AppError> {
    match state.intake.fetch_object(&key).await? {
        Some(object) => {
            Ok(([(header::CONTENT_TYPE, object.content_type)], object.bytes).into_response())
        }
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}
