//! HTTP backend that turns recipe constraints into prompts for a
//! chat-completion API and keeps an in-memory history of the results.

pub mod api;
pub mod config;
pub mod llm;
pub mod models;
pub mod parse;
pub mod prompts;
pub mod state;
pub mod validate;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa_swagger_ui::SwaggerUi;

pub use state::AppContext;

/// Application state shared across all handlers
pub type AppState = Arc<AppContext>;

/// Build the application router.
///
/// When a frontend origin is configured, the router carries a CORS layer
/// allowing that origin with GET/POST/OPTIONS; preflight requests are
/// answered by the layer itself.
pub fn router(state: AppState) -> Router {
    let cors_origin = state.config.cors_origin.clone();

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let mut app = Router::new()
        .route("/", get(api::index))
        .merge(api::form::router())
        .merge(api::recipe::router())
        .merge(api::history::router())
        .merge(swagger_ui)
        .with_state(state);

    if let Some(origin) = cors_origin {
        match origin.parse::<HeaderValue>() {
            Ok(origin) => {
                let cors = CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers(Any);
                app = app.layer(cors);
            }
            Err(_) => {
                tracing::warn!("Ignoring unparseable RECETARIO_CORS_ORIGIN: {}", origin);
            }
        }
    }

    app
}
