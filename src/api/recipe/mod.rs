pub mod get;
pub mod modify;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the /recipe endpoints
pub fn router() -> Router<AppState> {
    Router::new().route("/recipe", get(get::get_latest).post(modify::modify_recipe))
}

#[derive(OpenApi)]
#[openapi(
    paths(get::get_latest, modify::modify_recipe),
    components(schemas(modify::ModifyRecipeRequest))
)]
pub struct ApiDoc;
