pub mod builder;
pub mod config;
pub mod details;
pub mod error;
pub mod gateway;
pub mod handler;
pub mod model;
pub mod parser;
pub mod prompt;
pub mod providers;

pub use builder::{RecipeSuggester, RecipeSuggesterBuilder};
pub use config::SuggestConfig;
pub use details::parse_recipe_details;
pub use error::SuggestError;
pub use gateway::RecipeGateway;
pub use handler::{generate_recipes, HandlerResponse};
pub use model::{
    GenerateRecipesRequest, GenerateRecipesResponse, RecipeDetails, RecipeSuggestion,
};
pub use parser::{extract_url_from_line, format_suggestions, is_recipe_title_line, parse_recipes};

/// Suggest recipes for `ingredients` using configuration from `config.toml` and the environment.
///
/// Unlike [`generate_recipes`], upstream failures are returned as errors
/// instead of being folded into an empty response.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes = recipe_suggest::suggest_recipes("tomato, basil, pasta").await?;
/// for recipe in recipes {
///     println!("{} {}", recipe.name, recipe.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn suggest_recipes(ingredients: &str) -> Result<Vec<RecipeSuggestion>, SuggestError> {
    let config = SuggestConfig::load()?;
    let gateway = RecipeGateway::new(&config)?;
    let text = gateway.generate(ingredients).await?;
    Ok(parse_recipes(&text))
}
