//! Modification prompt for adjusting the latest recipe.

/// Trailing format instruction with a worked example, so the model keeps the
/// delimiter format when rewriting an existing recipe.
pub const FORMAT_EXAMPLE: &str = "Responde con el formato Nombre$Ingredientes$Receta. Por ejemplo: Sopa de tomate$tomate, cebolla, sal$Sofríe la cebolla, añade el tomate y cocina veinte minutos. No imprimas más de lo indicado.";

/// Render the modification prompt against the latest recipe's instructions.
///
/// Picks one of three phrasings depending on which of add/remove is empty.
/// Callers reject the both-empty case before rendering.
pub fn render_modify_prompt(add: &str, remove: &str, instructions: &str) -> String {
    let change = match (add.is_empty(), remove.is_empty()) {
        (true, false) => format!("Modifica la siguiente receta quitando {remove}."),
        (false, true) => format!("Modifica la siguiente receta agregando {add}."),
        _ => format!("Modifica la siguiente receta quitando {remove} y agregando {add}."),
    };

    format!("{change} Receta: {instructions} {FORMAT_EXAMPLE}")
}
