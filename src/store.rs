use crate::config::ScoutConfig;
use crate::error::ScoutError;
use crate::model::LocalRecipe;
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File holding the saved-recipe array.
pub const STORE_FILE: &str = "my_added_recipes.json";

/// Durable storage for user-added recipes: one JSON array, replaced whole on
/// every write. An absent store reads as an empty array.
pub trait RecipeStore {
    fn load(&self) -> Result<Vec<LocalRecipe>, ScoutError>;
    fn save(&self, recipes: &[LocalRecipe]) -> Result<(), ScoutError>;
    fn clear(&self) -> Result<(), ScoutError>;
}

/// Store backed by a single JSON file on disk.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Store location from config, falling back to the per-user data directory.
    pub fn from_config(config: &ScoutConfig) -> Self {
        let path = config.store_path.clone().unwrap_or_else(default_path);
        JsonFileStore { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("recipe-scout")
        .join(STORE_FILE)
}

impl RecipeStore for JsonFileStore {
    fn load(&self) -> Result<Vec<LocalRecipe>, ScoutError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // Absent file is the empty list
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, recipes: &[LocalRecipe]) -> Result<(), ScoutError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(recipes)?;
        fs::write(&self.path, raw)?;
        debug!("Saved {} recipes to {}", recipes.len(), self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), ScoutError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
