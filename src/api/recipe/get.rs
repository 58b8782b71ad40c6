use crate::models::RecipeDocument;
use crate::AppState;
use axum::{extract::State, Json};

#[utoipa::path(
    get,
    path = "/recipe",
    tag = "recipe",
    responses(
        (status = 200, description = "Latest generated or modified recipe", body = RecipeDocument)
    )
)]
pub async fn get_latest(State(state): State<AppState>) -> Json<RecipeDocument> {
    let session = state.session.read().await;

    Json(RecipeDocument {
        recipe: session.latest.clone(),
    })
}
