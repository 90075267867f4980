use crate::client::SpoonacularClient;
use crate::error::ScoutError;
use crate::model::{DisplayRecipe, RecipeDetail};
use futures::future::join_all;
use log::{info, warn};

/// Shown when a detail record carries no instructions in any form.
pub const NO_INSTRUCTIONS: &str = "No instructions available.";
/// Shown for a recipe whose detail fetch failed; the rest of the batch is kept.
pub const FAILED_INSTRUCTIONS: &str = "Failed to load instructions.";

/// What a search produced, before any rendering.
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// Input was empty after trimming; no network call was made
    NoInput,
    /// The search endpoint returned no usable candidates
    NoMatches,
    /// One merged record per candidate, in response order
    Found(Vec<DisplayRecipe>),
}

/// Normalize free-text ingredient input into the query form:
/// lowercased, split on commas, each token trimmed, rejoined with commas.
/// Empty tokens are kept ("a,,b" stays "a,,b"). Returns None for blank input.
pub fn normalize_ingredients(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed
        .to_lowercase()
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(",");
    Some(normalized)
}

/// Derive the instruction text for one recipe, in priority order:
/// 1. the first analyzed-instruction set, when it has steps: numbered and
///    newline-joined
/// 2. the flat `instructions` string, if non-empty
/// 3. the no-instructions sentinel
pub fn derive_instructions(detail: &RecipeDetail) -> String {
    if let Some(set) = detail.analyzed_instructions.first() {
        if !set.steps.is_empty() {
            return set
                .steps
                .iter()
                .enumerate()
                .map(|(i, s)| format!("{}. {}", i + 1, s.step))
                .collect::<Vec<_>>()
                .join("\n");
        }
    }

    if let Some(text) = &detail.instructions {
        if !text.is_empty() {
            return text.clone();
        }
    }

    NO_INSTRUCTIONS.to_string()
}

/// Run the full search pipeline: normalize the input, query the search
/// endpoint, then fetch every detail record concurrently and merge.
///
/// The detail fetches are issued as independent futures and joined before
/// anything is returned; a failed or malformed detail fetch degrades that one
/// recipe to [`FAILED_INSTRUCTIONS`] instead of aborting the batch. Errors
/// from the search call itself abort the whole operation.
pub async fn find_recipes(
    client: &SpoonacularClient,
    raw_input: &str,
) -> Result<SearchOutcome, ScoutError> {
    let ingredients = match normalize_ingredients(raw_input) {
        Some(ingredients) => ingredients,
        None => return Ok(SearchOutcome::NoInput),
    };

    info!("Loading recipes for: {}", ingredients);
    let results = client.find_by_ingredients(&ingredients).await?;
    if results.is_empty() {
        return Ok(SearchOutcome::NoMatches);
    }

    let detail_fetches = results.iter().map(|result| {
        let id = result.id;
        async move {
            match client.recipe_information(id).await {
                Ok(detail) => derive_instructions(&detail),
                Err(err) => {
                    warn!("Could not load instructions for recipe {}: {}", id, err);
                    FAILED_INSTRUCTIONS.to_string()
                }
            }
        }
    });
    let instructions = join_all(detail_fetches).await;

    let recipes = results
        .into_iter()
        .zip(instructions)
        .map(|(result, instructions)| DisplayRecipe::merge(result, instructions))
        .collect();
    Ok(SearchOutcome::Found(recipes))
}
