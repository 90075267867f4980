use crate::model::{DisplayRecipe, LocalRecipe};
use crate::search::SearchOutcome;
use html_escape::{encode_double_quoted_attribute, encode_text};

pub const NO_INPUT_MESSAGE: &str = "Please enter at least one ingredient.";
pub const NO_MATCHES_MESSAGE: &str = "No matching recipes found from Spoonacular.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch recipes. Please try again later.";
pub const EMPTY_BOX_MESSAGE: &str = "No recipes added yet.";

/// Expansion state shared by one batch of result cards.
///
/// Per card the states are {collapsed, expanded}; at most one card is expanded
/// at a time, and while one is expanded every sibling is hidden. Clicks arrive
/// from the embedding host as `toggle(index)`, where `index` is the card's
/// `data-index` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardState {
    expanded: Option<usize>,
}

impl CardState {
    /// Initial state: all cards collapsed, all visible.
    pub fn new() -> Self {
        CardState::default()
    }

    /// Apply one click on the card at `index`: a collapsed card becomes the
    /// sole expanded card; clicking the expanded card collapses everything.
    pub fn toggle(&mut self, index: usize) {
        self.expanded = match self.expanded {
            Some(current) if current == index => None,
            _ => Some(index),
        };
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// A card is hidden while some other card is expanded.
    pub fn is_hidden(&self, index: usize) -> bool {
        matches!(self.expanded, Some(current) if current != index)
    }
}

/// Render a search outcome: either an inline message or the card list.
pub fn render_outcome(outcome: &SearchOutcome, state: &CardState) -> String {
    match outcome {
        SearchOutcome::NoInput => format!(
            r#"<p class="no-input-message">{}</p>"#,
            encode_text(NO_INPUT_MESSAGE)
        ),
        SearchOutcome::NoMatches => paragraph(NO_MATCHES_MESSAGE),
        SearchOutcome::Found(recipes) => render_results(recipes, state),
    }
}

/// Inline message for a failed search batch.
pub fn render_error() -> String {
    paragraph(FETCH_FAILED_MESSAGE)
}

/// One card per recipe. Collapsed cards show image and title with the detail
/// pane hidden; the expanded card shows its pane while its siblings are
/// hidden entirely.
pub fn render_results(recipes: &[DisplayRecipe], state: &CardState) -> String {
    recipes
        .iter()
        .enumerate()
        .map(|(index, recipe)| render_card(index, recipe, state))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_card(index: usize, recipe: &DisplayRecipe, state: &CardState) -> String {
    let card_class = if state.is_expanded(index) {
        "recipe-card expanded"
    } else {
        "recipe-card"
    };
    let card_style = if state.is_hidden(index) {
        " style=\"display:none;\""
    } else {
        ""
    };
    let details_style = if state.is_expanded(index) {
        "display:block;"
    } else {
        "display:none;"
    };

    format!(
        r#"<div class="{card_class}" data-index="{index}"{card_style}>
  <img src="{src}" alt="{alt}" />
  <h3>{title}</h3>
  <div class="recipe-details" style="{details_style}">
    <p><strong>Used Ingredients:</strong> {used}</p>
    <p><strong>Missed Ingredients:</strong> {missed}</p>
    <p><strong>Instructions:</strong><br>{instructions}</p>
  </div>
</div>"#,
        src = encode_double_quoted_attribute(&recipe.image),
        alt = encode_double_quoted_attribute(&recipe.title),
        title = encode_text(&recipe.title),
        used = encode_text(&recipe.used_ingredients.join(", ")),
        missed = encode_text(&recipe.missed_ingredients.join(", ")),
        instructions = encode_text(&recipe.instructions).replace('\n', "<br>"),
    )
}

/// Render the saved-recipe list, or the empty-state message.
pub fn render_saved(recipes: &[LocalRecipe]) -> String {
    if recipes.is_empty() {
        return paragraph(EMPTY_BOX_MESSAGE);
    }

    recipes
        .iter()
        .map(|recipe| {
            format!(
                r#"<div class="recipe-card">
  <h3>{name}</h3>
  <p><strong>Ingredients:</strong> {ingredients}</p>
  <p><strong>Instructions:</strong> {instructions}</p>
</div>"#,
                name = encode_text(&recipe.name),
                ingredients = encode_text(&recipe.ingredients.join(", ")),
                instructions = encode_text(&recipe.instructions),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", encode_text(text))
}
