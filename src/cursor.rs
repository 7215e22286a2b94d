//! Step-by-step read-out of the selected recipe: ingredients first, then steps.
//!
//! Progress lives in two optional counters on [`SessionState`]. They are decoded
//! into a [`CursorPosition`] at the start of every turn and written back after the
//! position has advanced, so a stale or out-of-range counter never causes a panic:
//! it is clamped and the walk falls through to the next phase.

use crate::recipe::{Recipe, RecipeCatalog};
use crate::session::SessionState;
use crate::speech::SpeechFormatter;
use crate::speech::prompts;

/// Where the read-out of a recipe currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPosition {
    NotStarted,
    /// Holds the index of the next ingredient to read. Equal to the ingredient
    /// count once every ingredient has been read.
    ListingIngredients(usize),
    /// Holds the index of the next step to read.
    ListingSteps(usize),
    Done,
}

/// One spoken instruction and whether it finished the recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    pub end_session: bool,
}

impl Utterance {
    fn continuing(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end_session: false,
        }
    }

    fn finished(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            end_session: true,
        }
    }
}

impl CursorPosition {
    /// Decodes the session counters against `recipe`.
    pub fn of(state: &SessionState, recipe: &Recipe) -> Self {
        let ingredient_count = recipe.ingredients.len();
        match (state.ingredient_cursor, state.step_cursor) {
            (_, Some(step)) if step >= recipe.steps.len() => CursorPosition::Done,
            (_, Some(step)) => CursorPosition::ListingSteps(step),
            (None, None) => CursorPosition::NotStarted,
            (Some(ingredient), None) => {
                CursorPosition::ListingIngredients(ingredient.min(ingredient_count))
            }
        }
    }

    /// Writes this position back into the session counters.
    pub fn store(self, state: &mut SessionState, recipe: &Recipe) {
        let (ingredient_cursor, step_cursor) = match self {
            CursorPosition::NotStarted => (None, None),
            CursorPosition::ListingIngredients(index) => (Some(index), None),
            CursorPosition::ListingSteps(index) => (Some(recipe.ingredients.len()), Some(index)),
            CursorPosition::Done => (Some(recipe.ingredients.len()), Some(recipe.steps.len())),
        };
        state.ingredient_cursor = ingredient_cursor;
        state.step_cursor = step_cursor;
    }

    /// Produces the next utterance and the position that follows it.
    pub fn advance(self, recipe: &Recipe) -> (Utterance, CursorPosition) {
        let ingredient_count = recipe.ingredients.len();
        match self {
            CursorPosition::NotStarted if ingredient_count > 0 => {
                read_ingredient(recipe, 0, prompts::INGREDIENTS_INTRO)
            }
            CursorPosition::NotStarted => read_step(recipe, 0, prompts::STEPS_INTRO),
            CursorPosition::ListingIngredients(index) if index < ingredient_count => {
                read_ingredient(recipe, index, prompts::NEXT_INGREDIENT)
            }
            CursorPosition::ListingIngredients(_) => read_step(recipe, 0, prompts::STEPS_INTRO),
            CursorPosition::ListingSteps(index) => read_step(recipe, index, prompts::NEXT_STEP),
            CursorPosition::Done => (
                Utterance::finished(prompts::RECIPE_ALREADY_COMPLETE),
                CursorPosition::Done,
            ),
        }
    }
}

/// Advances the read-out of the selected recipe by one item.
///
/// Without a selection, or with a selection that no longer exists in the catalog,
/// the state is left untouched and a fixed notice is returned.
pub fn advance(state: &mut SessionState, catalog: &RecipeCatalog) -> Utterance {
    let Some(id) = state.recipe_selection else {
        return Utterance::continuing(prompts::NO_RECIPE_SELECTED);
    };
    let Some(recipe) = catalog.get(id) else {
        tracing::warn!(recipe_id = %id, "session references a recipe missing from the catalog");
        return Utterance::continuing(prompts::NO_RECIPE_SELECTED);
    };

    let position = CursorPosition::of(state, recipe);
    let (utterance, next) = position.advance(recipe);
    tracing::debug!(recipe = %recipe.name, from = ?position, to = ?next, "advanced cursor");
    next.store(state, recipe);
    utterance
}

/// Rewinds the read-out and advances once, so the recipe is heard from the top.
pub fn restart(state: &mut SessionState, catalog: &RecipeCatalog) -> Utterance {
    if state
        .recipe_selection
        .is_some_and(|id| catalog.get(id).is_some())
    {
        state.reset_cursors();
    }
    advance(state, catalog)
}

fn read_ingredient(recipe: &Recipe, index: usize, lead: &str) -> (Utterance, CursorPosition) {
    let ingredient = &recipe.ingredients[index];
    let mut text = format!("{}{}", lead, SpeechFormatter::format_ingredient(ingredient));
    let next = index + 1;

    if next < recipe.ingredients.len() {
        if index == 0 {
            text.push_str(prompts::NEXT_INGREDIENT_HINT);
        }
        (Utterance::continuing(text), CursorPosition::ListingIngredients(next))
    } else if !recipe.steps.is_empty() {
        text.push_str(prompts::BEGIN_STEPS_HINT);
        (Utterance::continuing(text), CursorPosition::ListingIngredients(next))
    } else {
        text.push_str(prompts::RECIPE_COMPLETE);
        (Utterance::finished(text), CursorPosition::Done)
    }
}

fn read_step(recipe: &Recipe, index: usize, lead: &str) -> (Utterance, CursorPosition) {
    let Some(step) = recipe.steps.get(index) else {
        return (
            Utterance::finished(prompts::RECIPE_ALREADY_COMPLETE),
            CursorPosition::Done,
        );
    };

    let mut text = format!("{}{}", lead, step);
    let next = index + 1;
    if next >= recipe.steps.len() {
        text.push_str(prompts::RECIPE_COMPLETE);
        (Utterance::finished(text), CursorPosition::Done)
    } else {
        if index == 0 {
            text.push_str(prompts::NEXT_STEP_HINT);
        }
        (Utterance::continuing(text), CursorPosition::ListingSteps(next))
    }
}
