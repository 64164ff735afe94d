use clap::Parser;
use log::error;
use recipe_suggest::{
    generate_recipes, GenerateRecipesRequest, RecipeGateway, SuggestConfig, SuggestError,
};

#[derive(Parser)]
#[command(name = "recipe-suggest")]
#[command(about = "Suggest recipes for a list of ingredients", long_about = None)]
struct Args {
    /// Ingredients, e.g. "tomato, basil, pasta"
    #[arg(required_unless_present = "details")]
    ingredients: Vec<String>,

    /// Extract ingredients, quantities, instructions and notes for a recipe URL instead
    #[arg(long, value_name = "URL", conflicts_with = "ingredients")]
    details: Option<String>,

    /// Print the unparsed completion text instead of JSON
    #[arg(long)]
    raw: bool,

    /// Override the configured model
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = SuggestConfig::load().map_err(SuggestError::from)?;
    if let Some(model) = args.model {
        config.model = model;
    }
    let gateway = RecipeGateway::new(&config)?;

    if let Some(url) = args.details {
        let details = gateway.extract_details(&url).await?;
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    let ingredients = args.ingredients.join(" ");

    if args.raw {
        println!("{}", gateway.generate(&ingredients).await?);
        return Ok(());
    }

    let response = generate_recipes(&gateway, &GenerateRecipesRequest { ingredients }).await;
    println!("{}", serde_json::to_string_pretty(&response.body)?);

    if !response.status.is_success() {
        return Err(format!("request failed with status {}", response.status).into());
    }
    Ok(())
}
