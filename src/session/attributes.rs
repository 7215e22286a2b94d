use super::SessionState;
use crate::recipe::{NAME_DELIMITER, RecipeId};
use serde_json::{Map, Value};

/// Opaque key/value storage handed back by the session store on every turn.
pub type SessionAttributes = Map<String, Value>;

pub const INGREDIENTS_KEY: &str = "ingredients";
pub const RECIPE_SELECTION_KEY: &str = "recipeSelection";
pub const INGREDIENT_CURSOR_KEY: &str = "ingredientCursor";
pub const STEP_CURSOR_KEY: &str = "stepCursor";
pub const LAST_UTTERANCE_KEY: &str = "lastUtterance";

// Keys written by earlier releases of the skill.
const LEGACY_RECIPE_SELECTION_KEY: &str = "recipeIndex";
const LEGACY_INGREDIENT_CURSOR_KEY: &str = "ingredientIndex";
const LEGACY_STEP_CURSOR_KEY: &str = "stepIndex";
const LEGACY_LAST_UTTERANCE_KEY: &str = "lastResponse";

impl SessionState {
    /// Decodes the session store. Malformed or unknown values are read as absent.
    pub fn from_attributes(attributes: &SessionAttributes) -> Self {
        let lookup = |key: &str, legacy: &str| attributes.get(key).or_else(|| attributes.get(legacy));

        Self {
            ingredients: attributes
                .get(INGREDIENTS_KEY)
                .map(decode_ingredients)
                .unwrap_or_default(),
            recipe_selection: lookup(RECIPE_SELECTION_KEY, LEGACY_RECIPE_SELECTION_KEY)
                .and_then(decode_index)
                .map(RecipeId),
            ingredient_cursor: lookup(INGREDIENT_CURSOR_KEY, LEGACY_INGREDIENT_CURSOR_KEY)
                .and_then(decode_index),
            step_cursor: lookup(STEP_CURSOR_KEY, LEGACY_STEP_CURSOR_KEY).and_then(decode_index),
            last_utterance: lookup(LAST_UTTERANCE_KEY, LEGACY_LAST_UTTERANCE_KEY)
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Encodes the state for the session store. Absent fields are omitted.
    ///
    /// Ingredients are packed into a single `::`-delimited string so older readers
    /// of the store keep working.
    pub fn to_attributes(&self) -> SessionAttributes {
        let mut attributes = Map::new();
        if !self.ingredients.is_empty() {
            attributes.insert(
                INGREDIENTS_KEY.to_string(),
                Value::String(self.ingredients.join(NAME_DELIMITER)),
            );
        }
        if let Some(id) = self.recipe_selection {
            attributes.insert(RECIPE_SELECTION_KEY.to_string(), Value::from(id.index()));
        }
        if let Some(cursor) = self.ingredient_cursor {
            attributes.insert(INGREDIENT_CURSOR_KEY.to_string(), Value::from(cursor));
        }
        if let Some(cursor) = self.step_cursor {
            attributes.insert(STEP_CURSOR_KEY.to_string(), Value::from(cursor));
        }
        if let Some(text) = &self.last_utterance {
            attributes.insert(LAST_UTTERANCE_KEY.to_string(), Value::String(text.clone()));
        }
        attributes
    }
}

fn decode_ingredients(value: &Value) -> Vec<String> {
    match value {
        Value::String(packed) if packed.is_empty() => Vec::new(),
        Value::String(packed) => packed.split(NAME_DELIMITER).map(str::to_string).collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn decode_index(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
