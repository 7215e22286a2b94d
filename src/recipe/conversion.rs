use super::definition::{Recipe, RequiredIngredient};
use crate::error::CatalogError;
use serde::Deserialize;

/// Separator used by the catalog format for packing several names into one string.
pub const NAME_DELIMITER: &str = "::";

/// A trait for custom data models that can be converted into a list of catalog recipes.
///
/// This is the extension point for loading recipes from any source. The bundled JSON
/// format implements it through [`RawCatalog`]; other formats only need to produce
/// `Recipe` values in catalog order.
///
/// # Example
///
/// ```rust,no_run
/// use sous::error::CatalogError;
/// use sous::recipe::{IntoCatalog, Recipe, RequiredIngredient};
///
/// struct CsvRow { dish: String, item: String, amount: f64 }
/// struct CsvRecipes { rows: Vec<CsvRow> }
///
/// impl IntoCatalog for CsvRecipes {
///     fn into_recipes(self) -> Result<Vec<Recipe>, CatalogError> {
///         Ok(self
///             .rows
///             .into_iter()
///             .map(|row| Recipe {
///                 name: row.dish,
///                 ingredients: vec![RequiredIngredient::new(row.item, "", row.amount)],
///                 steps: vec![],
///             })
///             .collect())
///     }
/// }
/// ```
pub trait IntoCatalog {
    /// Consumes the object and converts it into recipes, preserving order.
    fn into_recipes(self) -> Result<Vec<Recipe>, CatalogError>;
}

// --- JSON Deserialization Structs (Input Format Specific) ---

/// The bundled catalog format: an ordered JSON array of recipes.
#[derive(Deserialize, Debug)]
#[serde(transparent)]
pub struct RawCatalog {
    pub recipes: Vec<RawRecipe>,
}

#[derive(Deserialize, Debug)]
pub struct RawRecipe {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<RawIngredient>,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Deserialize, Debug)]
pub struct RawIngredient {
    pub name: String,
    #[serde(default, alias = "altNames")]
    pub alt_names: Option<RawAltNames>,
    #[serde(default)]
    pub measure: String,
    pub quantity: f64,
}

/// Alternate names are written either as a `::`-delimited string or as a list.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum RawAltNames {
    Delimited(String),
    List(Vec<String>),
}

impl RawAltNames {
    fn into_names(self) -> Vec<String> {
        let names: Vec<String> = match self {
            RawAltNames::Delimited(packed) => packed
                .split(NAME_DELIMITER)
                .map(str::to_string)
                .collect(),
            RawAltNames::List(list) => list,
        };
        names
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect()
    }
}

impl IntoCatalog for RawCatalog {
    fn into_recipes(self) -> Result<Vec<Recipe>, CatalogError> {
        self.recipes
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_recipe(index))
            .collect()
    }
}

impl RawRecipe {
    fn into_recipe(self, index: usize) -> Result<Recipe, CatalogError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::Validation(format!(
                "Recipe at position {} has an empty name",
                index
            )));
        }

        let ingredients = self
            .ingredients
            .into_iter()
            .map(|raw| raw.into_ingredient(&name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Recipe {
            name,
            ingredients,
            steps: self.steps,
        })
    }
}

impl RawIngredient {
    fn into_ingredient(self, recipe_name: &str) -> Result<RequiredIngredient, CatalogError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::Validation(format!(
                "Recipe '{}' lists an ingredient with an empty name",
                recipe_name
            )));
        }
        if !self.quantity.is_finite() || self.quantity < 0.0 {
            return Err(CatalogError::Validation(format!(
                "Ingredient '{}' in recipe '{}' has invalid quantity {}",
                name, recipe_name, self.quantity
            )));
        }

        Ok(RequiredIngredient {
            name,
            alt_names: self.alt_names.map(RawAltNames::into_names).unwrap_or_default(),
            measure: self.measure.trim().to_string(),
            quantity: self.quantity,
        })
    }
}
