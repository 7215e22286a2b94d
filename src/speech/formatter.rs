use crate::recipe::RequiredIngredient;
use itertools::Itertools;

/// Turns catalog data and ledger contents into text meant to be read aloud.
pub struct SpeechFormatter;

impl SpeechFormatter {
    /// Joins items into a spoken list with a terminal "and".
    ///
    /// `["a"]` -> `"a"`, `["a", "b"]` -> `"a and b"`, `["a", "b", "c"]` -> `"a, b, and c"`.
    /// An empty slice has nothing to say and yields `None`.
    pub fn format_list<S: AsRef<str>>(items: &[S]) -> Option<String> {
        match items {
            [] => None,
            [only] => Some(only.as_ref().to_string()),
            [first, second] => Some(format!("{} and {}", first.as_ref(), second.as_ref())),
            [head @ .., last] => Some(format!(
                "{}, and {}",
                head.iter().map(AsRef::as_ref).join(", "),
                last.as_ref()
            )),
        }
    }

    /// Renders one line of the ingredient read-out, e.g. `"3 cups of water"`.
    /// Ingredients counted without a unit read as `"2 eggs"`.
    pub fn format_ingredient(ingredient: &RequiredIngredient) -> String {
        let quantity = Self::format_quantity(ingredient.quantity);
        if ingredient.measure.is_empty() {
            format!("{} {}", quantity, ingredient.name)
        } else {
            format!("{} {} of {}", quantity, ingredient.measure, ingredient.name)
        }
    }

    /// Format a quantity for speech, dropping the fraction of whole numbers.
    pub fn format_quantity(quantity: f64) -> String {
        if quantity.fract() == 0.0 {
            format!("{}", quantity as i64)
        } else {
            format!("{}", quantity)
        }
    }
}
