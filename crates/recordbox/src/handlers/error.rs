use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use recordbox_core::record::IntakeError;
use recordbox_core::storage::intake_error_to_status_code;

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(intake_error) = self.0.downcast_ref::<IntakeError>() {
            let code = intake_error_to_status_code(intake_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        // Backend details stay in the log; clients get the status text only.
        if status_code.is_server_error() {
            tracing::error!(error = ?self.0, "Request failed");
            let reason = status_code.canonical_reason().unwrap_or("Internal Server Error");
            return (status_code, reason).into_response();
        }

        tracing::warn!(status = %status_code, error = %self.0, "Request rejected");
        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
