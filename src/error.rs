use thiserror::Error;

/// Errors that can occur while searching, storing or exporting recipes
#[derive(Error, Debug)]
pub enum ScoutError {
    /// The recipe API could not be reached, or returned a body that is not JSON
    #[error("Recipe API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    /// No API key in configuration or environment
    #[error("Spoonacular API key not configured (set SPOONACULAR_API_KEY or api_key in config.toml)")]
    MissingApiKey,

    /// Failed to read or write the local recipe store or an export file
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    /// Failed to encode or decode stored recipe data
    #[error("Recipe data error: {0}")]
    DataError(#[from] serde_json::Error),

    /// Builder misuse, e.g. running a search without ingredients
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
