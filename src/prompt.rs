/// System message sent with every suggestion request.
pub const RECIPE_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates recipes based on ingredients.";

/// Build the user message embedding the ingredient list verbatim.
pub fn build_user_prompt(ingredients: &str) -> String {
    format!(
        "Generate a list of 3-5 recipes with their names and URLs based on the following ingredients: {}",
        ingredients
    )
}

/// System message for extracting the details of a single recipe page.
pub const RECIPE_DETAIL_SYSTEM_PROMPT: &str = "You are a helpful assistant that extracts recipes.";

/// Build the user message asking for the sections of the recipe at `url`.
pub fn build_detail_prompt(url: &str) -> String {
    format!(
        "Extract the ingredients, quantities, instructions, and notes from the following recipe URL: {}",
        url
    )
}
