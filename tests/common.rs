//! Common test utilities for building catalogs, routers and session state.
use sous::prelude::*;

/// The single-recipe catalog used throughout the walkthrough scenario.
#[allow(dead_code)]
pub const BOILED_WATER_JSON: &str = r#"[
  {
    "name": "boiled water",
    "ingredients": [{ "name": "water", "measure": "cups", "quantity": 3 }],
    "steps": ["pour water", "heat water"]
  }
]"#;

#[allow(dead_code)]
pub fn boiled_water_catalog() -> RecipeCatalog {
    RecipeCatalog::from_json(BOILED_WATER_JSON).expect("fixture catalog should parse")
}

/// A recipe built directly from its parts.
#[allow(dead_code)]
pub fn recipe(name: &str, ingredients: Vec<RequiredIngredient>, steps: &[&str]) -> Recipe {
    Recipe {
        name: name.to_string(),
        ingredients,
        steps: steps.iter().map(|s| s.to_string()).collect(),
    }
}

/// A catalog mixing both ingredient-name collision styles:
/// `onions` is only reachable from "onion" by substring, `apples` lists "apple" as
/// an alternate name.
#[allow(dead_code)]
pub fn collision_catalog() -> RecipeCatalog {
    RecipeCatalog::new(vec![
        recipe(
            "caramelized onions",
            vec![
                RequiredIngredient::new("onions", "", 4.0),
                RequiredIngredient::new("butter", "tablespoons", 2.0),
            ],
            &["slice the onions", "cook them slowly in the butter"],
        ),
        recipe(
            "baked apples",
            vec![
                RequiredIngredient::new("apples", "", 4.0).with_alt_names(["apple"]),
                RequiredIngredient::new("cinnamon", "teaspoons", 1.0),
            ],
            &["core the apples", "sprinkle with cinnamon", "bake for thirty minutes"],
        ),
    ])
}

#[allow(dead_code)]
pub fn state_with_ingredients(ingredients: &[&str]) -> SessionState {
    SessionState {
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        ..SessionState::default()
    }
}

#[allow(dead_code)]
pub fn router_for(catalog: RecipeCatalog) -> Router {
    Router::builder(catalog).build()
}

/// Sends one request and unwraps the response.
#[allow(dead_code)]
pub fn turn(router: &Router, request: Request) -> Response {
    router
        .handle(request)
        .expect("turn should not fail")
        .expect("turn should produce a response")
}
