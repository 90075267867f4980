use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Runtime configuration for the search client and the local store
#[derive(Debug, Deserialize, Clone)]
pub struct ScoutConfig {
    /// Spoonacular API key; can also be supplied via the SPOONACULAR_API_KEY
    /// environment variable (resolved when the client is built)
    pub api_key: Option<String>,
    /// Base URL of the recipe API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Result cap passed to the find-by-ingredients endpoint
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Overrides the default per-user location of the recipe store file
    pub store_path: Option<PathBuf>,
}

// Default value functions
fn default_base_url() -> String {
    "https://api.spoonacular.com".to_string()
}

fn default_max_results() -> u32 {
    5
}

fn default_timeout() -> u64 {
    30
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            max_results: default_max_results(),
            timeout: default_timeout(),
            store_path: None,
        }
    }
}

impl ScoutConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCOUT prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCOUT__API_KEY, RECIPE_SCOUT__MAX_RESULTS
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Environment variables with RECIPE_SCOUT prefix
            // Use double underscore before each key: RECIPE_SCOUT__API_KEY
            .add_source(
                Environment::with_prefix("RECIPE_SCOUT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
