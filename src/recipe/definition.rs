use serde::{Deserialize, Serialize};

/// Position of a recipe inside its catalog.
///
/// Catalog order is significant: matching returns the first recipe that qualifies,
/// so the index doubles as the stable identifier stored in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecipeId(pub usize);

impl RecipeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable recipe: a display name, the ingredients it needs and the steps to follow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<RequiredIngredient>,
    pub steps: Vec<String>,
}

/// A single ingredient a recipe needs, with the names a user might call it by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredIngredient {
    /// Canonical name, e.g. `"apples"`.
    pub name: String,
    /// Synonyms a user might say instead, e.g. `["apple", "green apple"]`.
    pub alt_names: Vec<String>,
    /// Measurement unit. Empty means a plain count.
    pub measure: String,
    pub quantity: f64,
}

impl RequiredIngredient {
    pub fn new(name: impl Into<String>, measure: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            alt_names: Vec::new(),
            measure: measure.into(),
            quantity,
        }
    }

    pub fn with_alt_names<I, S>(mut self, alt_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alt_names = alt_names.into_iter().map(Into::into).collect();
        self
    }

    /// Canonical name followed by every alternate name.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.alt_names.iter().map(String::as_str))
    }
}
