//! End-to-end conversations through the router.
mod common;
use common::*;
use sous::prelude::*;
use sous::speech::prompts;

#[test]
fn test_boiled_water_walkthrough() {
    let router = router_for(boiled_water_catalog());

    let response = turn(
        &router,
        Request::intent("ProvideIngredient")
            .with_slot("Ingredient", "water")
            .new_session(),
    );
    assert_eq!(response.spoken_text, "You have water");
    assert_eq!(response.session_state.ingredients, vec!["water"]);

    let response = turn(&router, Request::intent("FindRecipe").with_state(response.session_state));
    assert!(response.spoken_text.contains("boiled water"));
    assert_eq!(response.session_state.recipe_selection, Some(RecipeId(0)));

    let response = turn(
        &router,
        Request::intent("BeginRecipeInstructions").with_state(response.session_state),
    );
    assert!(response.spoken_text.contains("3 cups of water"));
    assert!(response.spoken_text.contains("saying, continue"));
    assert!(!response.should_end_session);

    let response = turn(
        &router,
        Request::intent("ContinueRecipeInstructions").with_state(response.session_state),
    );
    assert!(response.spoken_text.contains("pour water"));
    assert!(response.spoken_text.contains("Hear the next step"));
    assert!(!response.should_end_session);

    let response = turn(
        &router,
        Request::intent("ContinueRecipeInstructions").with_state(response.session_state),
    );
    assert!(response.spoken_text.contains("heat water"));
    assert!(response.spoken_text.contains("you're all done"));
    assert!(response.should_end_session);
}

#[test]
fn test_missing_slot_reprompts_without_changing_ledger() {
    let router = router_for(boiled_water_catalog());
    let state = state_with_ingredients(&["milk"]);

    let response = turn(
        &router,
        Request::intent("ProvideIngredient")
            .with_slot("Ingredient", "   ")
            .with_state(state),
    );
    assert_eq!(response.spoken_text, prompts::MISSING_INGREDIENT);
    assert_eq!(
        response.reprompt_text.as_deref(),
        Some(prompts::MISSING_INGREDIENT_REPROMPT)
    );
    assert_eq!(response.session_state.ingredients, vec!["milk"]);
    assert!(!response.should_end_session);
}

#[test]
fn test_list_ingredients() {
    let router = router_for(boiled_water_catalog());

    let response = turn(&router, Request::intent("ListIngredients"));
    assert_eq!(response.spoken_text, prompts::NO_INGREDIENTS);

    let response = turn(
        &router,
        Request::intent("ListIngredients").with_state(state_with_ingredients(&["a", "b", "c"])),
    );
    assert_eq!(response.spoken_text, "You have a, b, and c");
}

#[test]
fn test_remove_last_ingredient() {
    let router = router_for(boiled_water_catalog());

    let response = turn(
        &router,
        Request::intent("RemoveLastIngredient").with_state(state_with_ingredients(&["milk", "eggs"])),
    );
    assert!(response.spoken_text.contains("eggs"));
    assert_eq!(response.session_state.ingredients, vec!["milk"]);

    let response = turn(&router, Request::intent("RemoveLastIngredient"));
    assert_eq!(response.spoken_text, prompts::NO_INGREDIENTS);
    assert!(!response.should_end_session);
}

#[test]
fn test_remove_last_can_be_disabled() {
    let router = Router::builder(boiled_water_catalog())
        .with_remove_last(false)
        .build();
    let result = router.handle(Request::intent("RemoveLastIngredient"));
    assert_eq!(
        result.unwrap_err(),
        DialogueError::UnrecognizedIntent("RemoveLastIngredient".to_string())
    );
}

#[test]
fn test_find_recipe_guidance_and_no_match() {
    let router = router_for(boiled_water_catalog());

    let response = turn(&router, Request::intent("FindRecipe"));
    assert_eq!(response.spoken_text, prompts::NO_INGREDIENTS);

    let mut state = state_with_ingredients(&["chicken"]);
    state.recipe_selection = Some(RecipeId(0));
    state.ingredient_cursor = Some(1);
    let response = turn(&router, Request::intent("FindRecipe").with_state(state));
    assert_eq!(response.spoken_text, prompts::NO_RECIPE_MATCHED);
    assert_eq!(response.session_state.recipe_selection, None);
    assert_eq!(response.session_state.ingredient_cursor, None);
    assert!(!response.should_end_session);
}

#[test]
fn test_instructions_without_recipe() {
    let router = router_for(boiled_water_catalog());
    for intent in ["BeginRecipeInstructions", "ContinueRecipeInstructions"] {
        let response = turn(&router, Request::intent(intent));
        assert_eq!(response.spoken_text, prompts::NO_RECIPE_SELECTED);
        assert!(!response.should_end_session);
    }
}

#[test]
fn test_repeat_replays_previous_turn() {
    let router = router_for(boiled_water_catalog());

    let first = turn(
        &router,
        Request::intent("ProvideIngredient").with_slot("Ingredient", "water"),
    );
    let repeated = turn(
        &router,
        Request::intent("RepeatLastResponse").with_state(first.session_state.clone()),
    );
    assert_eq!(repeated.spoken_text, first.spoken_text);
    assert_eq!(repeated.session_state.last_utterance.as_deref(), Some("You have water"));
    assert_eq!(repeated.session_state.ingredients, first.session_state.ingredients);
}

#[test]
fn test_repeat_with_nothing_said() {
    let router = router_for(boiled_water_catalog());
    let response = turn(&router, Request::intent("RepeatLastResponse"));
    assert_eq!(response.spoken_text, prompts::NOTHING_TO_REPEAT);
}

#[test]
fn test_every_turn_records_last_utterance() {
    let router = router_for(boiled_water_catalog());
    let response = turn(&router, Request::launch().new_session());
    assert_eq!(
        response.session_state.last_utterance.as_deref(),
        Some(response.spoken_text.as_str())
    );
}

#[test]
fn test_welcome_and_stop() {
    let router = Router::builder(boiled_water_catalog())
        .with_skill_name("Kitchen Buddy")
        .build();

    let welcome = turn(&router, Request::launch().with_state(state_with_ingredients(&["old"])));
    assert!(welcome.spoken_text.contains("welcome to Kitchen Buddy"));
    assert!(welcome.reprompt_text.is_some());
    assert!(welcome.session_state.ingredients.is_empty());
    assert!(!welcome.should_end_session);

    let goodbye = turn(&router, Request::intent("StopSession").with_state(state_with_ingredients(&["x"])));
    assert_eq!(goodbye.spoken_text, "Thanks for using Kitchen Buddy");
    assert!(goodbye.should_end_session);
    assert!(goodbye.session_state.ingredients.is_empty());
}

#[test]
fn test_legacy_intent_names() {
    let router = router_for(boiled_water_catalog());
    let response = turn(
        &router,
        Request::intent("MyIngredientsAreIntent").with_slot("Ingredient", "water"),
    );
    assert_eq!(response.session_state.ingredients, vec!["water"]);

    let response = turn(&router, Request::intent("AMAZON.StopIntent"));
    assert!(response.should_end_session);
}

#[test]
fn test_unrecognized_and_missing_intents_are_errors() {
    let router = router_for(boiled_water_catalog());

    assert_eq!(
        router.handle(Request::intent("OrderPizza")).unwrap_err(),
        DialogueError::UnrecognizedIntent("OrderPizza".to_string())
    );
    assert_eq!(
        router.handle(Request::intent("findrecipe")).unwrap_err(),
        DialogueError::UnrecognizedIntent("findrecipe".to_string())
    );
    assert_eq!(
        router.handle(Request::new(RequestKind::IntentRequest)).unwrap_err(),
        DialogueError::MissingIntent
    );
}

#[test]
fn test_lifecycle_notifications_produce_no_response() {
    let router = router_for(boiled_water_catalog());
    assert_eq!(router.handle(Request::new(RequestKind::SessionStarted)).unwrap(), None);
    assert_eq!(router.handle(Request::new(RequestKind::SessionEndedRequest)).unwrap(), None);
}

#[test]
fn test_new_session_ignores_stale_state() {
    let router = router_for(boiled_water_catalog());
    let response = turn(
        &router,
        Request::intent("ListIngredients")
            .with_state(state_with_ingredients(&["leftover"]))
            .new_session(),
    );
    assert_eq!(response.spoken_text, prompts::NO_INGREDIENTS);
}

#[test]
fn test_begin_restarts_a_recipe_in_progress() {
    let router = router_for(boiled_water_catalog());
    let mut state = state_with_ingredients(&["water"]);
    state.recipe_selection = Some(RecipeId(0));
    state.ingredient_cursor = Some(1);
    state.step_cursor = Some(1);

    let response = turn(&router, Request::intent("BeginRecipeInstructions").with_state(state));
    assert!(response.spoken_text.contains("First up is, 3 cups of water"));
    assert_eq!(response.session_state.step_cursor, None);
}

#[test]
fn test_substring_router_matches_loose_names() {
    let router = Router::builder(collision_catalog())
        .with_match_policy(MatchPolicy::Substring)
        .build();
    let response = turn(
        &router,
        Request::intent("FindRecipe").with_state(state_with_ingredients(&["onion", "butter"])),
    );
    assert!(response.spoken_text.contains("caramelized onions"));

    let exact = router_for(collision_catalog());
    let response = turn(
        &exact,
        Request::intent("FindRecipe").with_state(state_with_ingredients(&["onion", "butter"])),
    );
    assert_eq!(response.spoken_text, prompts::NO_RECIPE_MATCHED);
}

#[test]
fn test_router_is_shareable_across_threads() {
    let router = std::sync::Arc::new(router_for(RecipeCatalog::builtin().unwrap()));
    let handles: Vec<_> = ["water", "eggs", "apple"]
        .into_iter()
        .map(|ingredient| {
            let router = std::sync::Arc::clone(&router);
            std::thread::spawn(move || {
                turn(
                    &router,
                    Request::intent("ProvideIngredient").with_slot("Ingredient", ingredient),
                )
                .session_state
                .ingredients
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().len(), 1);
    }
}
