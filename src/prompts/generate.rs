//! Generation prompt for new recipes.

/// Fixed trailing instruction mandating the `Nombre$Ingredientes$Receta`
/// output format and forbidding extra output.
pub const FORMAT_INSTRUCTION: &str = "Imprime el nombre de la receta, un símbolo $, lista los ingredientes, imprime otro símbolo $ y después muestra la receta. No imprimas más de lo indicado.";

/// Render the generation prompt from the form fields.
///
/// Ingredient and allergy constraints are only stated when the fields are
/// non-empty. No escaping or length bounding is applied.
pub fn render_generate_prompt(
    cuisine: &str,
    diet: &str,
    difficulty: &str,
    time_minutes: i64,
    ingredients: &str,
    allergies: &str,
) -> String {
    let mut prompt = format!(
        "Imprime una receta {cuisine} {diet} de dificultad {difficulty} y {time_minutes} minutos."
    );

    if !ingredients.is_empty() {
        prompt.push_str(&format!(" Debe contener {ingredients}."));
    }

    if !allergies.is_empty() {
        prompt.push_str(&format!(" No debe contener {allergies}."));
    }

    prompt.push(' ');
    prompt.push_str(FORMAT_INSTRUCTION);
    prompt
}
