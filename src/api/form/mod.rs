pub mod generate;
pub mod render;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the /form endpoints
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/form",
        get(render::render_form).post(generate::generate_recipe),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(render::render_form, generate::generate_recipe),
    components(schemas(generate::GenerateRecipeRequest))
)]
pub struct ApiDoc;
