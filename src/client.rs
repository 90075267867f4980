use crate::config::ScoutConfig;
use crate::error::ScoutError;
use crate::model::{RecipeDetail, SearchResult};
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Client for the two Spoonacular endpoints the search pipeline uses.
pub struct SpoonacularClient {
    client: Client,
    api_key: String,
    base_url: String,
    max_results: u32,
}

impl SpoonacularClient {
    /// Create a client from configuration
    pub fn new(config: &ScoutConfig) -> Result<Self, ScoutError> {
        Self::with_timeout(config, None)
    }

    /// Create a client with an explicit request timeout, applied as given;
    /// `None` falls back to the configured whole-seconds value.
    pub fn with_timeout(
        config: &ScoutConfig,
        timeout: Option<Duration>,
    ) -> Result<Self, ScoutError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
            .ok_or(ScoutError::MissingApiKey)?;

        let timeout = timeout.unwrap_or(Duration::from_secs(config.timeout));
        let client = Client::builder().timeout(timeout).build()?;

        Ok(SpoonacularClient {
            client,
            api_key,
            base_url: config.base_url.clone(),
            max_results: config.max_results,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        SpoonacularClient {
            client: Client::new(),
            api_key,
            base_url,
            max_results: 5,
        }
    }

    /// Call the find-by-ingredients endpoint.
    ///
    /// A body that is JSON but not an array (Spoonacular reports quota and key
    /// errors that way) is treated as "no matches" rather than a failure; a
    /// non-JSON body or transport error is a batch failure.
    pub async fn find_by_ingredients(
        &self,
        ingredients: &str,
    ) -> Result<Vec<SearchResult>, ScoutError> {
        let url = format!("{}/recipes/findByIngredients", self.base_url);
        let params = [
            ("ingredients", ingredients.to_string()),
            ("number", self.max_results.to_string()),
            ("apiKey", self.api_key.clone()),
        ];

        let response = self.client.get(&url).query(&params).send().await?;
        let body: Value = response.json().await?;

        if !body.is_array() {
            debug!("Search endpoint returned a non-array body: {}", body);
            return Ok(Vec::new());
        }

        Ok(serde_json::from_value(body)?)
    }

    /// Fetch the detail record for one recipe id.
    pub async fn recipe_information(&self, id: i64) -> Result<RecipeDetail, ScoutError> {
        let url = format!("{}/recipes/{}/information", self.base_url, id);
        let response = self
            .client
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        let detail: RecipeDetail = response.json().await?;
        debug!("Fetched information for recipe {}", id);
        Ok(detail)
    }
}
