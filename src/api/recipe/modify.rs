use crate::api::ErrorResponse;
use crate::models::RecipeDocument;
use crate::parse::parse_recipe;
use crate::prompts::render_modify_prompt;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

/// Commands to adjust the latest recipe.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ModifyRecipeRequest {
    #[serde(default)]
    pub add: String,
    #[serde(default, rename = "rm")]
    pub remove: String,
}

#[utoipa::path(
    post,
    path = "/recipe",
    tag = "recipe",
    request_body = ModifyRecipeRequest,
    responses(
        (status = 200, description = "Modified recipe", body = RecipeDocument),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 502, description = "Completion API failed", body = ErrorResponse)
    )
)]
pub async fn modify_recipe(
    State(state): State<AppState>,
    payload: Result<Json<ModifyRecipeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response()
        }
    };

    if request.add.is_empty() && request.remove.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Nothing to add or remove".to_string(),
            }),
        )
            .into_response();
    }

    // Snapshot the latest instructions; the completion call must not hold
    // the session lock.
    let instructions = {
        let session = state.session.read().await;
        session.latest.instructions.clone()
    };

    let prompt = render_modify_prompt(&request.add, &request.remove, &instructions);

    let content = match state.llm.complete(&prompt).await {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Completion request failed: {}", e);
            return (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Completion API request failed".to_string(),
                }),
            )
                .into_response();
        }
    };

    let recipe = parse_recipe(&content);

    let mut session = state.session.write().await;
    session.record(recipe.clone());

    (StatusCode::OK, Json(RecipeDocument { recipe })).into_response()
}
