use crate::error::ScoutError;
use crate::model::LocalRecipe;
use crate::store::RecipeStore;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

pub const JSON_EXPORT_FILE: &str = "my_recipes.json";
pub const CSV_EXPORT_FILE: &str = "my_recipes.csv";

/// Serialize the sequence exactly as stored: a raw JSON array.
pub fn recipes_to_json(recipes: &[LocalRecipe]) -> Result<String, ScoutError> {
    Ok(serde_json::to_string(recipes)?)
}

/// Serialize to CSV, or None when there is nothing to export.
///
/// The header row is the record's field set (every record has the same shape,
/// so this equals the union of all keys). Every data field is double-quoted
/// with embedded quotes doubled, and the ingredient list is joined with `;`
/// before quoting. Rows are newline-joined without a trailing newline.
pub fn recipes_to_csv(recipes: &[LocalRecipe]) -> Option<String> {
    if recipes.is_empty() {
        return None;
    }

    let mut lines = vec!["name,ingredients,instructions,image".to_string()];
    for recipe in recipes {
        let row = [
            quote(&recipe.name),
            quote(&recipe.ingredients.join(";")),
            quote(&recipe.instructions),
            quote(&recipe.image),
        ]
        .join(",");
        lines.push(row);
    }
    Some(lines.join("\n"))
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Write the stored recipes as JSON into `dir` and return the file path.
/// An absent store exports the empty array.
pub fn export_json<S: RecipeStore>(store: &S, dir: &Path) -> Result<PathBuf, ScoutError> {
    let recipes = store.load()?;
    fs::create_dir_all(dir)?;
    let path = dir.join(JSON_EXPORT_FILE);
    fs::write(&path, recipes_to_json(&recipes)?)?;
    info!("Exported {} recipes to {}", recipes.len(), path.display());
    Ok(path)
}

/// Write the stored recipes as CSV into `dir`. Nothing is written when the
/// store is empty.
pub fn export_csv<S: RecipeStore>(store: &S, dir: &Path) -> Result<Option<PathBuf>, ScoutError> {
    let recipes = store.load()?;
    let csv = match recipes_to_csv(&recipes) {
        Some(csv) => csv,
        None => return Ok(None),
    };

    fs::create_dir_all(dir)?;
    let path = dir.join(CSV_EXPORT_FILE);
    fs::write(&path, csv)?;
    info!("Exported {} recipes to {}", recipes.len(), path.display());
    Ok(Some(path))
}
