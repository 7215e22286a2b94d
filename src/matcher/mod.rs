//! Picks a recipe the user can cook with the ingredients in their ledger.
mod policy;

pub use policy::*;

use crate::recipe::{RecipeCatalog, RecipeId};

/// Checks ingredient coverage of catalog recipes.
///
/// This is a coverage check, not a ranking: a recipe qualifies when every one of
/// its required ingredients is covered by at least one supplied ingredient, and the
/// first qualifying recipe in catalog order wins. Extra supplied ingredients and
/// their order are irrelevant.
pub struct RecipeMatcher {
    policy: Box<dyn IngredientPolicy>,
}

impl RecipeMatcher {
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            policy: policy.strategy(),
        }
    }

    /// Uses a caller-provided strategy instead of one of the built-in policies.
    pub fn with_policy(policy: Box<dyn IngredientPolicy>) -> Self {
        Self { policy }
    }

    /// Returns the first recipe in `catalog` fully covered by `ingredients`.
    pub fn find<S: AsRef<str>>(&self, ingredients: &[S], catalog: &RecipeCatalog) -> Option<RecipeId> {
        catalog.iter().find_map(|(id, recipe)| {
            let required = recipe.ingredients.len();
            let found = recipe
                .ingredients
                .iter()
                .filter(|req| {
                    ingredients
                        .iter()
                        .any(|supplied| self.policy.covers(req, supplied.as_ref()))
                })
                .count();
            tracing::debug!(recipe = %recipe.name, found, required, "checked recipe coverage");
            (found >= required).then_some(id)
        })
    }
}

impl Default for RecipeMatcher {
    fn default() -> Self {
        Self::new(MatchPolicy::default())
    }
}
