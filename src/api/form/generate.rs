use crate::api::ErrorResponse;
use crate::models::RecipeDocument;
use crate::parse::parse_recipe;
use crate::prompts::render_generate_prompt;
use crate::validate;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

/// Form fields for a new recipe.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRecipeRequest {
    #[serde(rename = "dif")]
    pub difficulty: String,
    #[serde(rename = "time")]
    pub time_minutes: i64,
    #[serde(rename = "ings")]
    pub ingredients: String,
    pub diet: String,
    #[serde(rename = "all")]
    pub allergies: String,
    #[serde(rename = "cuis")]
    pub cuisine: String,
}

#[utoipa::path(
    post,
    path = "/form",
    tag = "form",
    request_body = GenerateRecipeRequest,
    responses(
        (status = 200, description = "Generated recipe", body = RecipeDocument),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 502, description = "Completion API failed", body = ErrorResponse)
    )
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRecipeRequest>, JsonRejection>,
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

    let lax = state.config.lax_validation;

    if !validate::is_valid_token_list(&request.ingredients, lax) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid ingredients list".to_string(),
            }),
        )
            .into_response();
    }

    if !validate::is_valid_token_list(&request.allergies, lax) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid allergies list".to_string(),
            }),
        )
            .into_response();
    }

    if !validate::is_valid_difficulty(&request.difficulty) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid difficulty".to_string(),
            }),
        )
            .into_response();
    }

    let prompt = render_generate_prompt(
        &request.cuisine,
        &request.diet,
        &request.difficulty,
        request.time_minutes,
        &request.ingredients,
        &request.allergies,
    );

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
