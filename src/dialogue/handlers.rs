//! One function per intent. Each takes the current session state by value and
//! returns the response carrying the updated state.

use super::types::{INGREDIENT_SLOT, Request, Response};
use crate::cursor;
use crate::ledger;
use crate::matcher::RecipeMatcher;
use crate::recipe::RecipeCatalog;
use crate::session::SessionState;
use crate::speech::prompts;

pub(super) fn welcome(skill_name: &str) -> Response {
    Response::new(
        SessionState::default(),
        prompts::WELCOME_TITLE,
        prompts::welcome(skill_name),
    )
    .with_reprompt(prompts::WELCOME_REPROMPT)
}

pub(super) fn farewell(skill_name: &str) -> Response {
    Response::new(
        SessionState::default(),
        prompts::GOODBYE_TITLE,
        prompts::farewell(skill_name),
    )
    .ending_session(true)
}

pub(super) fn provide_ingredient(mut state: SessionState, request: &Request) -> Response {
    match request.slot(INGREDIENT_SLOT) {
        Some(ingredient) => {
            let text = prompts::ingredient_added(ingredient);
            ledger::append(&mut state, ingredient);
            Response::new(state, prompts::ADD_INGREDIENT_TITLE, text)
                .with_reprompt(prompts::INGREDIENT_ADDED_REPROMPT)
        }
        None => Response::new(
            state,
            prompts::ADD_INGREDIENT_TITLE,
            prompts::MISSING_INGREDIENT,
        )
        .with_reprompt(prompts::MISSING_INGREDIENT_REPROMPT),
    }
}

pub(super) fn list_ingredients(state: SessionState) -> Response {
    let text = match ledger::format(ledger::list(&state)) {
        Some(list) => prompts::ingredient_list(&list),
        None => prompts::NO_INGREDIENTS.to_string(),
    };
    Response::new(state, prompts::LIST_INGREDIENTS_TITLE, text)
}

pub(super) fn remove_last_ingredient(mut state: SessionState) -> Response {
    let text = match ledger::remove_last(&mut state) {
        Some(removed) => prompts::ingredient_removed(&removed),
        None => prompts::NO_INGREDIENTS.to_string(),
    };
    Response::new(state, prompts::REMOVE_INGREDIENT_TITLE, text)
}

pub(super) fn find_recipe(
    mut state: SessionState,
    matcher: &RecipeMatcher,
    catalog: &RecipeCatalog,
) -> Response {
    if ledger::list(&state).is_empty() {
        return Response::new(state, prompts::FIND_RECIPE_TITLE, prompts::NO_INGREDIENTS);
    }

    let matched = matcher
        .find(ledger::list(&state), catalog)
        .and_then(|id| catalog.get(id).map(|recipe| (id, recipe)));

    let text = match matched {
        Some((id, recipe)) => {
            tracing::info!(recipe_id = %id, recipe = %recipe.name, "matched recipe");
            state.recipe_selection = Some(id);
            state.reset_cursors();
            prompts::recipe_found(&recipe.name)
        }
        None => {
            tracing::info!(ingredients = state.ingredients.len(), "no recipe matched");
            state.clear_selection();
            prompts::NO_RECIPE_MATCHED.to_string()
        }
    };
    Response::new(state, prompts::FIND_RECIPE_TITLE, text)
}

pub(super) fn begin_instructions(mut state: SessionState, catalog: &RecipeCatalog) -> Response {
    let utterance = cursor::restart(&mut state, catalog);
    Response::new(state, prompts::EXPLAIN_RECIPE_TITLE, utterance.text)
        .ending_session(utterance.end_session)
}

pub(super) fn continue_instructions(mut state: SessionState, catalog: &RecipeCatalog) -> Response {
    let utterance = cursor::advance(&mut state, catalog);
    Response::new(state, prompts::EXPLAIN_RECIPE_TITLE, utterance.text)
        .ending_session(utterance.end_session)
}

pub(super) fn repeat_last(state: SessionState) -> Response {
    let text = state
        .last_utterance
        .clone()
        .unwrap_or_else(|| prompts::NOTHING_TO_REPEAT.to_string());
    Response::new(state, prompts::REPEAT_TITLE, text)
}
