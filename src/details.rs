//! Section parsing for single-recipe extraction replies.
//!
//! The model is asked to list a recipe under `Ingredients:`, `Quantities:`,
//! `Instructions:` and `Notes:` headings. Each heading is searched for
//! independently, so sections may be missing without affecting the others.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::RecipeDetails;

/// Ingredients run until the quantities or, failing that, the instructions
static INGREDIENTS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Ingredients:(.*?)(?:Quantities:|Instructions:)")
        .expect("Invalid ingredients regex")
});

static QUANTITIES_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Quantities:(.*?)Instructions:").expect("Invalid quantities regex")
});

/// Instructions run until the notes or the end of the text
static INSTRUCTIONS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Instructions:(.*?)(?:Notes:|$)").expect("Invalid instructions regex")
});

static NOTES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)Notes:(.*)").expect("Invalid notes regex"));

fn section(regex: &Regex, text: &str) -> String {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Split an extraction reply into its sections. Never fails; absent sections are empty.
pub fn parse_recipe_details(text: &str) -> RecipeDetails {
    RecipeDetails {
        ingredients: section(&INGREDIENTS_REGEX, text),
        quantities: section(&QUANTITIES_REGEX, text),
        instructions: section(&INSTRUCTIONS_REGEX, text),
        notes: section(&NOTES_REGEX, text),
        url: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sections() {
        let text = "Here is the recipe.\n\nIngredients:\n- spaghetti\n- tomatoes\n\nQuantities:\n- 200g spaghetti\n- 4 tomatoes\n\nInstructions:\n1. Boil pasta.\n2. Add sauce.\n\nNotes:\nServe hot.\n";

        let details = parse_recipe_details(text);
        assert_eq!(details.ingredients, "- spaghetti\n- tomatoes");
        assert_eq!(details.quantities, "- 200g spaghetti\n- 4 tomatoes");
        assert_eq!(details.instructions, "1. Boil pasta.\n2. Add sauce.");
        assert_eq!(details.notes, "Serve hot.");
        assert!(details.url.is_empty());
    }

    #[test]
    fn test_ingredients_end_at_instructions_without_quantities() {
        let text = "Ingredients: eggs, milk\nInstructions: Whisk and fry.";

        let details = parse_recipe_details(text);
        assert_eq!(details.ingredients, "eggs, milk");
        assert_eq!(details.quantities, "");
        assert_eq!(details.instructions, "Whisk and fry.");
        assert_eq!(details.notes, "");
    }

    #[test]
    fn test_ingredients_without_following_heading_are_dropped() {
        let details = parse_recipe_details("Ingredients: eggs, milk");
        assert_eq!(details.ingredients, "");
        assert!(details.is_empty());
    }

    #[test]
    fn test_notes_without_other_sections() {
        let details = parse_recipe_details("I could not open that page.\nNotes: try another link");
        assert_eq!(details.notes, "try another link");
        assert_eq!(details.instructions, "");
        assert!(!details.is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_recipe_details("").is_empty());
    }
}
