pub mod builder;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod recipe_box;
pub mod render;
pub mod search;
pub mod store;

use log::error;

pub use builder::{RecipeSearch, RecipeSearchBuilder};
pub use config::ScoutConfig;
pub use error::ScoutError;
pub use model::{DisplayRecipe, LocalRecipe};
pub use recipe_box::{RecipeBox, RecipeForm};
pub use render::CardState;
pub use search::SearchOutcome;
pub use store::{JsonFileStore, RecipeStore};

/// Search for recipes matching a comma-separated ingredient list
///
/// Configuration comes from config.toml, RECIPE_SCOUT environment variables,
/// and built-in defaults. Use [`RecipeSearch::builder`] to override individual
/// settings instead.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let outcome = recipe_scout::search_recipes("tomato, basil, olive oil").await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(ingredients: &str) -> Result<SearchOutcome, ScoutError> {
    RecipeSearch::builder().ingredients(ingredients).run().await
}

/// Search for recipes and render the result as an HTML fragment
///
/// This is the full lookup flow in one call: any failure is logged and
/// rendered as an inline error message, so the returned markup is always
/// safe to display.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() {
/// let html = recipe_scout::search_recipes_html("chicken, rice").await;
/// println!("{}", html);
/// # }
/// ```
pub async fn search_recipes_html(ingredients: &str) -> String {
    match search_recipes(ingredients).await {
        Ok(outcome) => render::render_outcome(&outcome, &CardState::new()),
        Err(err) => {
            error!("Recipe search failed: {}", err);
            render::render_error()
        }
    }
}
