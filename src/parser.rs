//! Line-oriented parsing of model output into recipe suggestions.
//!
//! The model is asked for a numbered list where each recipe title may be
//! followed by a line of the form `- URL: [label](target)`. Output is not
//! validated in any way, so anything that does not fit this shape is skipped
//! rather than reported.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::RecipeSuggestion;

/// Marker that introduces a link line under a recipe title.
pub const URL_LINE_PREFIX: &str = "- URL:";

/// Numbered-list marker such as `1. ` or `12.\t`, ASCII digits only
static TITLE_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").expect("Invalid title marker regex"));

/// Markdown link `[label](target)`, first occurrence only
static MARKDOWN_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Invalid markdown link regex"));

/// Returns the recipe name if `line` starts with a numbered-list marker.
///
/// The marker is stripped and the remainder trimmed.
pub fn recipe_title(line: &str) -> Option<&str> {
    TITLE_MARKER_REGEX
        .find(line)
        .map(|marker| line[marker.end()..].trim())
}

/// Whether `line` starts a new recipe entry.
pub fn is_recipe_title_line(line: &str) -> bool {
    TITLE_MARKER_REGEX.is_match(line)
}

/// Returns the link target of a `- URL: [label](target)` line.
pub fn extract_url_from_line(line: &str) -> Option<&str> {
    if !line.starts_with(URL_LINE_PREFIX) {
        return None;
    }
    MARKDOWN_LINK_REGEX
        .captures(line)
        .and_then(|caps| caps.get(2))
        .map(|target| target.as_str())
}

/// Parse free-form completion text into suggestions, preserving source order.
///
/// Never fails: unrecognised lines are ignored, a URL line without a
/// preceding title is dropped, and a title without a URL keeps `url = ""`.
pub fn parse_recipes(text: &str) -> Vec<RecipeSuggestion> {
    let mut recipes = Vec::new();
    let mut current: Option<RecipeSuggestion> = None;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(name) = recipe_title(line) {
            if let Some(done) = current.take() {
                recipes.push(done);
            }
            current = Some(RecipeSuggestion::new(name, ""));
        } else if line.starts_with(URL_LINE_PREFIX) {
            if let (Some(recipe), Some(url)) = (current.as_mut(), extract_url_from_line(line)) {
                recipe.url = url.to_string();
            }
        }
    }

    if let Some(done) = current {
        recipes.push(done);
    }

    recipes
}

/// Render suggestions in the numbered-list form that `parse_recipes` reads.
pub fn format_suggestions(recipes: &[RecipeSuggestion]) -> String {
    let mut out = String::new();
    for (index, recipe) in recipes.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, recipe.name));
        if !recipe.url.is_empty() {
            out.push_str(&format!("{} [Recipe]({})\n", URL_LINE_PREFIX, recipe.url));
        }
    }
    out
}
