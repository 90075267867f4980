use serde::{Deserialize, Serialize};

/// One candidate recipe returned by the find-by-ingredients endpoint.
///
/// Every field defaults so that near-shaped items in the response array still
/// deserialize; only these five fields are consumed downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, rename = "usedIngredients")]
    pub used_ingredients: Vec<IngredientRef>,
    #[serde(default, rename = "missedIngredients")]
    pub missed_ingredients: Vec<IngredientRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngredientRef {
    #[serde(default)]
    pub name: String,
}

/// Per-recipe detail record; only the instruction fields are consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeDetail {
    #[serde(default, rename = "analyzedInstructions")]
    pub analyzed_instructions: Vec<InstructionSet>,
    #[serde(default)]
    pub instructions: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstructionSet {
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstructionStep {
    #[serde(default)]
    pub step: String,
}

/// A search result merged with its derived instruction text, ready to render.
/// Lives for one render cycle and is never persisted.
#[derive(Debug, Clone)]
pub struct DisplayRecipe {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub used_ingredients: Vec<String>,
    pub missed_ingredients: Vec<String>,
    pub instructions: String,
}

impl DisplayRecipe {
    pub fn merge(result: SearchResult, instructions: String) -> Self {
        DisplayRecipe {
            id: result.id,
            title: result.title,
            image: result.image,
            used_ingredients: result.used_ingredients.into_iter().map(|i| i.name).collect(),
            missed_ingredients: result
                .missed_ingredients
                .into_iter()
                .map(|i| i.name)
                .collect(),
            instructions,
        }
    }
}

/// A user-authored recipe, persisted in the local store.
///
/// Field order is the serialization order and therefore the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub image: String,
}
