use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        pages::{add_form, index},
        records::{create_record, delete_record, list_records, serve_upload},
    },
    state::AppState,
};

/// Room for the text fields and multipart framing on top of the file itself.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let body_limit = state.intake.max_upload_bytes() + FORM_OVERHEAD_BYTES;

    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/records", get(list_records))
        .layer(cors);

    Router::new()
        .route("/", get(index))
        .route("/add", get(add_form).post(create_record))
        .route("/create", post(create_record))
        .route("/delete/{id}", get(delete_record))
        .route("/uploads/{key}", get(serve_upload))
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .with_state(state)
}
