use crate::api::ErrorResponse;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};

#[utoipa::path(
    get,
    path = "/form",
    tag = "form",
    responses(
        (status = 200, description = "Recipe request form", body = String, content_type = "text/html"),
        (status = 500, description = "Form template not readable", body = ErrorResponse)
    )
)]
pub async fn render_form(State(state): State<AppState>) -> impl IntoResponse {
    let template = match tokio::fs::read_to_string(&state.config.form_template).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(
                path = %state.config.form_template.display(),
                "Failed to read form template: {}",
                e
            );
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Form template not available".to_string(),
                }),
            )
                .into_response();
        }
    };

    // The template carries a single {{success}} placeholder; the initial
    // render is always the not-yet-submitted state.
    let page = template.replace("{{success}}", "false");

    Html(page).into_response()
}
