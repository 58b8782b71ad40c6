//! Wire types shared across endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A recipe parsed from completion output.
///
/// Serialized field names keep the capitalized form the frontend consumes.
/// The default value is the all-empty recipe, which is what `GET /recipe`
/// returns before anything has been generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Ingredients")]
    pub ingredients: String,
    #[serde(rename = "Recipe")]
    pub instructions: String,
}

/// Envelope for single-recipe responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeDocument {
    pub recipe: Recipe,
}

/// Envelope for the history endpoint.
///
/// `extra` stays zero-valued until the history is long enough to ask the
/// model for a similar recipe.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeHistoryDocument {
    #[serde(rename = "recipeHistory")]
    pub history: Vec<Recipe>,
    #[serde(rename = "extraRecipe")]
    pub extra: Recipe,
}
