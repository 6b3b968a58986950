use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use recordbox_core::record::Record;

use crate::{handlers::AppError, state::AppState};

/// Template wrapper that converts Askama templates into HTML responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// Index page: the record table followed by the create form.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    fields: &'a [String],
    records: Vec<Record>,
    action: &'static str,
}

/// Stand-alone create form.
#[derive(Template)]
#[template(path = "add.html")]
struct AddTemplate<'a> {
    fields: &'a [String],
    action: &'static str,
}

/// Handler for the index page (GET /).
pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let records = state.intake.list().await?;

    Ok(HtmlTemplate(IndexTemplate {
        fields: state.intake.schema().fields(),
        records,
        action: "/create",
    })
    .into_response())
}

/// Handler for the form page (GET /add).
pub async fn add_form(State(state): State<AppState>) -> Response {
    HtmlTemplate(AddTemplate {
        fields: state.intake.schema().fields(),
        action: "/add",
    })
    .into_response()
}
