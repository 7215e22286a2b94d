use super::conversion::{IntoCatalog, RawCatalog};
use super::definition::{Recipe, RecipeId};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fs;

const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/recipes.json");

/// The ordered, read-only collection of known recipes.
///
/// Loaded once at startup and shared (usually behind an `Arc`) by every session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Builds a catalog from any source that implements [`IntoCatalog`].
    pub fn from_source(source: impl IntoCatalog) -> Result<Self, CatalogError> {
        Ok(Self::new(source.into_recipes()?))
    }

    /// Parses the JSON catalog format.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_source(raw)
    }

    /// Loads a JSON catalog from disk.
    pub fn from_file(path: &str) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG_JSON)
    }

    /// Looks up a recipe. Stale or out-of-range ids yield `None`.
    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.get(id.index())
    }

    /// Iterates recipes in catalog order together with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (RecipeId, &Recipe)> {
        self.recipes
            .iter()
            .enumerate()
            .map(|(index, recipe)| (RecipeId(index), recipe))
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
