use crate::error::ScoutError;
use crate::model::LocalRecipe;
use crate::store::RecipeStore;

/// Placeholder used when a recipe is added without an image URL.
pub const DEFAULT_IMAGE_URL: &str = "https://source.unsplash.com/400x300/?food";

/// Raw form fields for a user-added recipe, before normalization.
#[derive(Debug, Clone, Default)]
pub struct RecipeForm {
    pub name: String,
    /// Comma-separated ingredient list
    pub ingredients: String,
    pub instructions: String,
    /// Optional image URL; blank falls back to [`DEFAULT_IMAGE_URL`]
    pub image: String,
}

impl RecipeForm {
    /// Build the stored record: text fields trimmed, ingredients lowercased
    /// and split on commas with each token trimmed. No validation beyond
    /// trimming happens here. An empty name is accepted as-is, and an empty
    /// ingredient field becomes a single empty token from the split.
    pub fn build(&self) -> LocalRecipe {
        let image = self.image.trim();
        LocalRecipe {
            name: self.name.trim().to_string(),
            ingredients: self
                .ingredients
                .trim()
                .to_lowercase()
                .split(',')
                .map(|token| token.trim().to_string())
                .collect(),
            instructions: self.instructions.trim().to_string(),
            image: if image.is_empty() {
                DEFAULT_IMAGE_URL.to_string()
            } else {
                image.to_string()
            },
        }
    }
}

/// Application state for the user's own recipes: the in-memory collection of
/// this session plus the durable store behind it.
pub struct RecipeBox<S: RecipeStore> {
    store: S,
    recipes: Vec<LocalRecipe>,
}

impl<S: RecipeStore> RecipeBox<S> {
    /// Open a box over the given store; the in-memory collection starts from
    /// the stored sequence.
    pub fn open(store: S) -> Result<Self, ScoutError> {
        let recipes = store.load()?;
        Ok(RecipeBox { store, recipes })
    }

    /// Build the record from the form and append it to both the in-memory
    /// collection and the store. The stored array is read, extended and
    /// written back whole; the single-writer model makes that safe.
    pub fn add(&mut self, form: &RecipeForm) -> Result<LocalRecipe, ScoutError> {
        let recipe = form.build();

        let mut stored = self.store.load()?;
        stored.push(recipe.clone());
        self.store.save(&stored)?;

        self.recipes.push(recipe.clone());
        Ok(recipe)
    }

    /// The in-memory collection for this session.
    pub fn recipes(&self) -> &[LocalRecipe] {
        &self.recipes
    }

    /// Re-read the stored sequence; the saved-recipes view reads storage, not
    /// the session collection.
    pub fn saved(&self) -> Result<Vec<LocalRecipe>, ScoutError> {
        self.store.load()
    }

    /// Delete every stored recipe. Only the durable side is cleared; the
    /// session collection is left alone.
    pub fn clear(&self) -> Result<(), ScoutError> {
        self.store.clear()
    }
}
