//! Unit tests for catalog loading, configuration, session codec and formatting.
mod common;
use common::*;
use serde_json::json;
use sous::prelude::*;
use sous::session::SessionAttributes;

#[test]
fn test_catalog_parses_alt_names_in_both_forms() {
    let catalog = RecipeCatalog::from_json(
        r#"[{
            "name": "fruit bowl",
            "ingredients": [
                { "name": "apples", "altNames": "apple:: green apple ::", "measure": "", "quantity": 2 },
                { "name": "pears", "altNames": ["pear"], "quantity": 1.5 }
            ],
            "steps": ["chop", "mix"]
        }]"#,
    )
    .unwrap();

    let recipe = catalog.get(RecipeId(0)).unwrap();
    assert_eq!(recipe.ingredients[0].alt_names, vec!["apple", "green apple"]);
    assert_eq!(recipe.ingredients[1].alt_names, vec!["pear"]);
    assert_eq!(recipe.ingredients[1].measure, "");
    assert_eq!(catalog.get(RecipeId(1)), None);
}

#[test]
fn test_catalog_validation_errors() {
    let negative = r#"[{ "name": "x", "ingredients": [{ "name": "y", "measure": "", "quantity": -1 }], "steps": [] }]"#;
    assert!(matches!(
        RecipeCatalog::from_json(negative),
        Err(CatalogError::Validation(_))
    ));

    let unnamed = r#"[{ "name": "  ", "ingredients": [], "steps": [] }]"#;
    assert!(matches!(
        RecipeCatalog::from_json(unnamed),
        Err(CatalogError::Validation(_))
    ));

    assert!(matches!(
        RecipeCatalog::from_json("{}"),
        Err(CatalogError::Parse(_))
    ));

    assert!(matches!(
        RecipeCatalog::from_file("does/not/exist.json"),
        Err(CatalogError::Io { .. })
    ));
}

#[test]
fn test_builtin_catalog_loads() {
    let catalog = RecipeCatalog::builtin().unwrap();
    assert!(!catalog.is_empty());
    assert_eq!(catalog.recipes()[0].name, "boiled water");
}

#[test]
fn test_catalog_artifact_round_trip() {
    let catalog = collision_catalog();
    let bytes = CatalogArtifact::new(catalog.clone()).to_bytes().unwrap();
    let restored = CatalogArtifact::from_bytes(&bytes).unwrap().into_catalog();
    assert_eq!(restored, catalog);

    assert!(matches!(
        CatalogArtifact::from_bytes(&[0xff, 0x01]),
        Err(CatalogError::Artifact(_))
    ));
}

#[test]
fn test_catalog_artifact_file() {
    let path = std::env::temp_dir().join(format!("sous-artifact-{}.bin", std::process::id()));
    let path = path.to_str().unwrap();

    CatalogArtifact::new(boiled_water_catalog()).save(path).unwrap();
    let restored = CatalogArtifact::from_file(path).unwrap().into_catalog();
    assert_eq!(restored, boiled_water_catalog());
    std::fs::remove_file(path).unwrap();
}

#[test]
fn test_session_attributes_encode_and_decode() {
    let state = SessionState {
        ingredients: vec!["milk".to_string(), "eggs".to_string()],
        recipe_selection: Some(RecipeId(2)),
        ingredient_cursor: Some(1),
        step_cursor: None,
        last_utterance: Some("You have eggs".to_string()),
    };

    let attributes = state.to_attributes();
    assert_eq!(attributes["ingredients"], "milk::eggs");
    assert_eq!(attributes["recipeSelection"], 2);
    assert!(!attributes.contains_key("stepCursor"));
    assert_eq!(SessionState::from_attributes(&attributes), state);
}

#[test]
fn test_session_attributes_are_lenient() {
    let attributes: SessionAttributes = serde_json::from_value(json!({
        "ingredients": ["rice", 7, "beans"],
        "recipeSelection": true,
        "ingredientCursor": "two",
        "stepCursor": -1,
        "lastResponse": "Hello"
    }))
    .unwrap();

    let state = SessionState::from_attributes(&attributes);
    assert_eq!(state.ingredients, vec!["rice", "beans"]);
    assert_eq!(state.recipe_selection, None);
    assert_eq!(state.ingredient_cursor, None);
    assert_eq!(state.step_cursor, None);
    assert_eq!(state.last_utterance.as_deref(), Some("Hello"));

    assert_eq!(SessionState::from_attributes(&SessionAttributes::new()), SessionState::default());
    assert!(SessionState::default().to_attributes().is_empty());
}

#[test]
fn test_config_defaults_and_overrides() {
    let config = Config::from_json(r#"{ "matchPolicy": "substring" }"#).unwrap();
    assert_eq!(config.match_policy, MatchPolicy::Substring);
    assert_eq!(config.skill_name, "Recipe Helper");
    assert!(config.remove_last_enabled);
    assert_eq!(config.application_id, None);

    assert!(matches!(
        Config::from_json(r#"{ "matchPolicy": "fuzzy" }"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_intent_parsing_is_exact() {
    assert_eq!("FindRecipe".parse::<Intent>(), Ok(Intent::FindRecipe));
    assert_eq!("StartRecipeIntent".parse::<Intent>(), Ok(Intent::BeginRecipeInstructions));
    assert!(" FindRecipe".parse::<Intent>().is_err());
    for intent in Intent::ALL {
        assert_eq!(intent.name().parse::<Intent>(), Ok(intent));
    }
}

#[test]
fn test_speech_formatting() {
    assert_eq!(SpeechFormatter::format_quantity(3.0), "3");
    assert_eq!(SpeechFormatter::format_quantity(0.5), "0.5");
    assert_eq!(
        SpeechFormatter::format_ingredient(&RequiredIngredient::new("water", "cups", 3.0)),
        "3 cups of water"
    );
    assert_eq!(
        SpeechFormatter::format_ingredient(&RequiredIngredient::new("eggs", "", 2.0)),
        "2 eggs"
    );
}

#[test]
fn test_error_display() {
    let err = DialogueError::UnrecognizedIntent("Dance".to_string());
    assert!(err.to_string().contains("Dance"));

    let err = CatalogError::Io {
        path: "recipes.json".to_string(),
        message: "not found".to_string(),
    };
    assert!(err.to_string().contains("recipes.json"));

    let err: TransportError = DialogueError::MissingIntent.into();
    assert_eq!(err.to_string(), "Intent request carried no intent name");
}
