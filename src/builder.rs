use std::time::Duration;

use crate::client::SpoonacularClient;
use crate::config::ScoutConfig;
use crate::error::ScoutError;
use crate::search::{self, SearchOutcome};

/// Builder for configuring and executing a recipe search
///
/// Settings left unset fall back to the loaded configuration (config.toml,
/// RECIPE_SCOUT environment variables, then defaults).
#[derive(Debug, Default)]
pub struct RecipeSearchBuilder {
    ingredients: Option<String>,
    api_key: Option<String>,
    base_url: Option<String>,
    max_results: Option<u32>,
    timeout: Option<Duration>,
}

impl RecipeSearchBuilder {
    /// Set the free-text ingredient list to search with
    ///
    /// # Example
    /// ```
    /// use recipe_scout::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .ingredients("tomato, basil, olive oil");
    /// ```
    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    /// Set the API key directly instead of relying on configuration or the
    /// SPOONACULAR_API_KEY environment variable
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Point the client at a different API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Cap the number of candidate recipes requested (default 5)
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_scout::RecipeSearch;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeSearch::builder()
    ///     .ingredients("chicken, rice")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Execute the search
    ///
    /// # Errors
    /// Returns `ScoutError` if:
    /// - No ingredients were specified with `.ingredients()`
    /// - No API key is available from any source
    /// - The search request fails or returns a non-JSON body
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_scout::RecipeSearch;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let outcome = RecipeSearch::builder()
    ///     .ingredients("tomato, basil")
    ///     .run()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run(self) -> Result<SearchOutcome, ScoutError> {
        let ingredients = self.ingredients.ok_or_else(|| {
            ScoutError::BuilderError("No ingredients specified. Use .ingredients()".to_string())
        })?;

        let mut config = ScoutConfig::load()?;
        if let Some(key) = self.api_key {
            config.api_key = Some(key);
        }
        if let Some(url) = self.base_url {
            config.base_url = url;
        }
        if let Some(max_results) = self.max_results {
            config.max_results = max_results;
        }

        // The timeout override goes to the client as-is; the whole-seconds
        // config field is only the fallback.
        let client = SpoonacularClient::with_timeout(&config, self.timeout)?;
        search::find_recipes(&client, &ingredients).await
    }
}

/// Main entry point for the builder API
pub struct RecipeSearch;

impl RecipeSearch {
    /// Creates a new builder for a recipe search
    ///
    /// # Example
    /// ```
    /// use recipe_scout::RecipeSearch;
    ///
    /// let builder = RecipeSearch::builder();
    /// ```
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }
}
