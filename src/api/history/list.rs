use crate::models::{Recipe, RecipeHistoryDocument};
use crate::parse::parse_recipe;
use crate::prompts::render_similar_prompt;
use crate::AppState;
use axum::{extract::State, Json};

/// History length at which the bonus similar-recipe call kicks in.
const EXTRA_RECIPE_THRESHOLD: usize = 3;

#[utoipa::path(
    get,
    path = "/history",
    tag = "history",
    responses(
        (status = 200, description = "All recipes generated in this process lifetime", body = RecipeHistoryDocument)
    )
)]
pub async fn list_history(State(state): State<AppState>) -> Json<RecipeHistoryDocument> {
    let (history, names) = {
        let session = state.session.read().await;
        let names: Vec<String> = session.history.iter().map(|r| r.name.clone()).collect();
        (session.history.clone(), names)
    };

    let extra = if history.len() >= EXTRA_RECIPE_THRESHOLD {
        let prompt = render_similar_prompt(&names);
        match state.llm.complete(&prompt).await {
            Ok(content) => parse_recipe(&content),
            Err(e) => {
                // The history itself is still valid; degrade to an empty
                // extra recipe instead of failing the whole response.
                tracing::warn!("Similar-recipe completion failed: {}", e);
                Recipe::default()
            }
        }
    } else {
        Recipe::default()
    };

    // The extra recipe is intentionally not recorded in the history.
    Json(RecipeHistoryDocument { history, extra })
}
