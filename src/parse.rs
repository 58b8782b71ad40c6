//! Parser for the `$`-delimited completion format.

use crate::models::Recipe;

/// Delimiter the model is instructed to emit between recipe fields.
pub const FIELD_DELIMITER: char = '$';

/// Parse raw completion content into a [`Recipe`].
///
/// The model is asked to answer as `Nombre$Ingredientes$Receta`. Content with
/// fewer than two delimiters does not carry distinguishable fields, so the
/// whole text is kept in the instructions field with `-` placeholders for the
/// rest. When the model emits more than two delimiters, only the first three
/// fields are kept and the tail is dropped.
pub fn parse_recipe(content: &str) -> Recipe {
    let parts: Vec<&str> = content.split(FIELD_DELIMITER).collect();

    match parts.as_slice() {
        [name, ingredients, instructions, ..] => Recipe {
            name: (*name).to_string(),
            ingredients: (*ingredients).to_string(),
            instructions: (*instructions).to_string(),
        },
        _ => Recipe {
            name: "-".to_string(),
            ingredients: "-".to_string(),
            instructions: content.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_fields() {
        let recipe = parse_recipe("Tortilla de patatas$patata, huevo, aceite$Fríe y cuaja.");
        assert_eq!(recipe.name, "Tortilla de patatas");
        assert_eq!(recipe.ingredients, "patata, huevo, aceite");
        assert_eq!(recipe.instructions, "Fríe y cuaja.");
    }

    #[test]
    fn test_extra_fields_are_dropped() {
        let recipe = parse_recipe("A$B$C$D");
        assert_eq!(recipe.name, "A");
        assert_eq!(recipe.ingredients, "B");
        assert_eq!(recipe.instructions, "C");
    }

    #[test]
    fn test_no_delimiter_falls_back() {
        let content = "Lo siento, no puedo generar esa receta.";
        let recipe = parse_recipe(content);
        assert_eq!(recipe.name, "-");
        assert_eq!(recipe.ingredients, "-");
        assert_eq!(recipe.instructions, content);
    }

    #[test]
    fn test_single_delimiter_falls_back() {
        let recipe = parse_recipe("Paella$arroz, azafrán");
        assert_eq!(recipe.name, "-");
        assert_eq!(recipe.ingredients, "-");
        assert_eq!(recipe.instructions, "Paella$arroz, azafrán");
    }

    #[test]
    fn test_empty_content_falls_back() {
        let recipe = parse_recipe("");
        assert_eq!(recipe.name, "-");
        assert_eq!(recipe.ingredients, "-");
        assert_eq!(recipe.instructions, "");
    }

    #[test]
    fn test_delimiters_only() {
        let recipe = parse_recipe("$$");
        assert_eq!(recipe.name, "");
        assert_eq!(recipe.ingredients, "");
        assert_eq!(recipe.instructions, "");
    }
}
