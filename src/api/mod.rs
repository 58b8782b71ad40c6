pub mod form;
pub mod history;
pub mod recipe;

use axum::response::Redirect;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::models::{Recipe, RecipeDocument, RecipeHistoryDocument};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Redirect the bare root to the form.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 303, description = "Redirect to /form")
    )
)]
pub async fn index() -> Redirect {
    Redirect::to("/form")
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components
    #[derive(OpenApi)]
    #[openapi(
        paths(index),
        components(schemas(ErrorResponse, Recipe, RecipeDocument, RecipeHistoryDocument))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    // Merge in each module's spec
    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        form::ApiDoc::openapi(),
        recipe::ApiDoc::openapi(),
        history::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        // Merge paths
        spec.paths.paths.extend(module_spec.paths.paths);

        // Merge components (schemas)
        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
