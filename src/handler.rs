use log::{debug, error, info};
use reqwest::StatusCode;

use crate::gateway::RecipeGateway;
use crate::model::{GenerateRecipesRequest, GenerateRecipesResponse};
use crate::parser::parse_recipes;

/// Status code and JSON body for one generate-recipes request.
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerResponse {
    pub status: StatusCode,
    pub body: GenerateRecipesResponse,
}

/// Serve one request: call the gateway, parse its text, and shape the reply.
///
/// Every upstream failure becomes a 500 with an empty list and the generic
/// error message. The cause is only logged.
pub async fn generate_recipes(
    gateway: &RecipeGateway,
    request: &GenerateRecipesRequest,
) -> HandlerResponse {
    match gateway.generate(&request.ingredients).await {
        Ok(text) => {
            let recipes = parse_recipes(&text);
            info!("Processed {} recipes", recipes.len());
            debug!("Processed recipes: {:?}", recipes);
            HandlerResponse {
                status: StatusCode::OK,
                body: GenerateRecipesResponse::success(recipes),
            }
        }
        Err(e) => {
            error!("Error generating recipes: {}", e);
            HandlerResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: GenerateRecipesResponse::failure(),
            }
        }
    }
}
