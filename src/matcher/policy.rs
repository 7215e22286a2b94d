use crate::recipe::RequiredIngredient;
use serde::{Deserialize, Serialize};

/// Decides whether something the user said satisfies a required ingredient.
pub trait IngredientPolicy: Send + Sync {
    fn covers(&self, required: &RequiredIngredient, supplied: &str) -> bool;
}

/// Case-insensitive equality against the canonical name or any alternate name.
///
/// `"Apple"` covers an ingredient named `"apples"` only when `"apple"` is listed
/// among its alternate names.
pub struct ExactPolicy;

impl IngredientPolicy for ExactPolicy {
    fn covers(&self, required: &RequiredIngredient, supplied: &str) -> bool {
        let supplied = supplied.trim().to_lowercase();
        required
            .names()
            .any(|name| name.to_lowercase() == supplied)
    }
}

/// Legacy matching: the canonical name contains what the user said.
///
/// `"onion"` covers `"onions"` and `"green onions"`; alternate names are ignored.
/// An empty string is never a match.
pub struct SubstringPolicy;

impl IngredientPolicy for SubstringPolicy {
    fn covers(&self, required: &RequiredIngredient, supplied: &str) -> bool {
        let supplied = supplied.trim().to_lowercase();
        !supplied.is_empty() && required.name.to_lowercase().contains(&supplied)
    }
}

/// The available ingredient matching strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Exact canonical or alternate name. The default.
    #[default]
    Exact,
    /// Substring of the canonical name. Looser, kept for older catalogs without alternate names.
    Substring,
}

impl MatchPolicy {
    pub fn strategy(self) -> Box<dyn IngredientPolicy> {
        match self {
            MatchPolicy::Exact => Box::new(ExactPolicy),
            MatchPolicy::Substring => Box::new(SubstringPolicy),
        }
    }
}
