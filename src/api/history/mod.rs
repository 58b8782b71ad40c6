pub mod list;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the /history endpoint
pub fn router() -> Router<AppState> {
    Router::new().route("/history", get(list::list_history))
}

#[derive(OpenApi)]
#[openapi(paths(list::list_history))]
pub struct ApiDoc;
