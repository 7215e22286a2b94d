//! The ingredient ledger: the ordered list of ingredients the user says they have.
//!
//! All operations are pure transformations of [`SessionState`]; nothing here does I/O.

use crate::session::SessionState;
use crate::speech::SpeechFormatter;

/// Adds an ingredient to the end of the ledger. Repeated names are stored again.
pub fn append(state: &mut SessionState, ingredient: impl Into<String>) {
    state.ingredients.push(ingredient.into());
}

/// Drops the most recently added ingredient and returns it.
///
/// Returns `None` when the ledger is already empty, leaving the state untouched.
pub fn remove_last(state: &mut SessionState) -> Option<String> {
    state.ingredients.pop()
}

/// The ingredients in insertion order.
pub fn list(state: &SessionState) -> &[String] {
    &state.ingredients
}

/// Human-readable list of ingredients; `None` when there are none.
pub fn format(ingredients: &[String]) -> Option<String> {
    SpeechFormatter::format_list(ingredients)
}
