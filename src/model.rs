use serde::{Deserialize, Serialize};

/// Error message returned to clients whenever generation fails, whatever the cause.
pub const GENERATION_FAILED: &str = "Failed to generate recipes";

/// A single suggested recipe parsed from the model output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSuggestion {
    pub name: String,
    /// Empty when no link was found for this recipe.
    pub url: String,
}

impl RecipeSuggestion {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Sections of a single recipe extracted from model output.
///
/// Each field holds the raw section text, trimmed; missing sections are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetails {
    pub ingredients: String,
    pub quantities: String,
    pub instructions: String,
    pub notes: String,
    /// Page the details were requested for
    pub url: String,
}

impl RecipeDetails {
    /// True when no section could be found in the text.
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
            && self.quantities.is_empty()
            && self.instructions.is_empty()
            && self.notes.is_empty()
    }
}

/// Inbound request body: `{"ingredients": "..."}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRecipesRequest {
    #[serde(default)]
    pub ingredients: String,
}

/// Response body, identical in shape for success and failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateRecipesResponse {
    pub recipes: Vec<RecipeSuggestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateRecipesResponse {
    pub fn success(recipes: Vec<RecipeSuggestion>) -> Self {
        Self {
            recipes,
            error: None,
        }
    }

    pub fn failure() -> Self {
        Self {
            recipes: Vec::new(),
            error: Some(GENERATION_FAILED.to_string()),
        }
    }
}
