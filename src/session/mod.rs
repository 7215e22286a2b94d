//! Typed per-session state and its mapping onto the opaque session store.
mod attributes;

pub use attributes::*;

use crate::recipe::RecipeId;

/// Everything the dialogue remembers between turns of one conversation.
///
/// Created empty when a session starts, handed back to the caller after every turn
/// and discarded when the session ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Ingredients in the order the user named them. Duplicates are kept.
    pub ingredients: Vec<String>,
    /// The recipe picked by the last successful match.
    pub recipe_selection: Option<RecipeId>,
    /// Number of recipe ingredients already read out. `None` means not started.
    pub ingredient_cursor: Option<usize>,
    /// Number of recipe steps already read out. `None` means not started.
    pub step_cursor: Option<usize>,
    /// Text of the most recent response, replayed on request.
    pub last_utterance: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the instruction walk so the next advance starts from the beginning.
    pub fn reset_cursors(&mut self) {
        self.ingredient_cursor = None;
        self.step_cursor = None;
    }

    /// Forgets the selected recipe together with any progress through it.
    pub fn clear_selection(&mut self) {
        self.recipe_selection = None;
        self.reset_cursors();
    }
}
