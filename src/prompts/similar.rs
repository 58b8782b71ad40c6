//! Bonus prompt asking for a recipe similar to the history.

/// Render the similar-recipe prompt from the history's recipe names.
///
/// No format instruction is appended; the degraded parse is the expected
/// path for this call.
pub fn render_similar_prompt(names: &[String]) -> String {
    format!("Muestrame una receta similar a estas: {}.", names.join(","))
}
