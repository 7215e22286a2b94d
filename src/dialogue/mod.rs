//! Turn dispatch: maps each request onto the ledger, matcher or cursor and builds
//! the response.
mod handlers;
mod intent;
mod types;

pub use intent::Intent;
pub use types::*;

use crate::config::Config;
use crate::error::DialogueError;
use crate::matcher::{IngredientPolicy, MatchPolicy, RecipeMatcher};
use crate::recipe::RecipeCatalog;
use crate::session::SessionState;
use std::sync::Arc;

/// Handles one turn at a time for any number of sessions.
///
/// A `Router` holds no per-session data: each request carries its session state in
/// and each response carries it back out. The catalog is shared read-only, so one
/// router can serve concurrent sessions from several threads.
pub struct Router {
    catalog: Arc<RecipeCatalog>,
    matcher: RecipeMatcher,
    config: Config,
}

pub struct RouterBuilder {
    catalog: Arc<RecipeCatalog>,
    config: Config,
    custom_policy: Option<Box<dyn IngredientPolicy>>,
}

impl RouterBuilder {
    pub fn new(catalog: impl Into<Arc<RecipeCatalog>>) -> Self {
        Self {
            catalog: catalog.into(),
            config: Config::default(),
            custom_policy: None,
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.config.match_policy = policy;
        self
    }

    /// Replaces the built-in matching policies with a custom strategy.
    pub fn with_custom_policy(mut self, policy: Box<dyn IngredientPolicy>) -> Self {
        self.custom_policy = Some(policy);
        self
    }

    pub fn with_skill_name(mut self, skill_name: impl Into<String>) -> Self {
        self.config.skill_name = skill_name.into();
        self
    }

    pub fn with_remove_last(mut self, enabled: bool) -> Self {
        self.config.remove_last_enabled = enabled;
        self
    }

    pub fn build(self) -> Router {
        let matcher = match self.custom_policy {
            Some(policy) => RecipeMatcher::with_policy(policy),
            None => RecipeMatcher::new(self.config.match_policy),
        };
        Router {
            catalog: self.catalog,
            matcher,
            config: self.config,
        }
    }
}

impl Router {
    pub fn builder(catalog: impl Into<Arc<RecipeCatalog>>) -> RouterBuilder {
        RouterBuilder::new(catalog)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> &RecipeCatalog {
        &self.catalog
    }

    /// Processes a single turn.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(response))` for launch and intent requests. The spoken text is
    ///   also stored as the session's last utterance.
    /// * `Ok(None)` for session-started and session-ended notifications, which
    ///   expect no answer.
    /// * `Err(DialogueError)` when the intent is missing or unrecognized. The turn is
    ///   abandoned and the caller decides what to tell the platform.
    pub fn handle(&self, request: Request) -> Result<Option<Response>, DialogueError> {
        let request_id = request.request_id.as_str();
        let session_id = request.session_id.as_str();

        if request.session_is_new {
            tracing::info!(request_id, session_id, "session started");
        }

        let response = match request.kind {
            RequestKind::SessionStarted => return Ok(None),
            RequestKind::SessionEndedRequest => {
                tracing::info!(request_id, session_id, "session ended");
                return Ok(None);
            }
            RequestKind::LaunchRequest => {
                tracing::info!(request_id, session_id, "launch");
                handlers::welcome(&self.config.skill_name)
            }
            RequestKind::IntentRequest => {
                let name = request
                    .intent_name
                    .as_deref()
                    .ok_or(DialogueError::MissingIntent)?;
                let intent = self.resolve_intent(name)?;
                tracing::info!(request_id, session_id, %intent, "intent");
                self.dispatch(intent, &request)
            }
        };

        Ok(Some(Self::remember(response)))
    }

    fn resolve_intent(&self, name: &str) -> Result<Intent, DialogueError> {
        let intent: Intent = name.parse()?;
        if intent == Intent::RemoveLastIngredient && !self.config.remove_last_enabled {
            return Err(DialogueError::UnrecognizedIntent(name.to_string()));
        }
        Ok(intent)
    }

    fn dispatch(&self, intent: Intent, request: &Request) -> Response {
        let state = if request.session_is_new {
            SessionState::default()
        } else {
            request.session_state.clone()
        };

        match intent {
            Intent::ProvideIngredient => handlers::provide_ingredient(state, request),
            Intent::ListIngredients => handlers::list_ingredients(state),
            Intent::RemoveLastIngredient => handlers::remove_last_ingredient(state),
            Intent::FindRecipe => handlers::find_recipe(state, &self.matcher, &self.catalog),
            Intent::BeginRecipeInstructions => handlers::begin_instructions(state, &self.catalog),
            Intent::ContinueRecipeInstructions => {
                handlers::continue_instructions(state, &self.catalog)
            }
            Intent::RepeatLastResponse => handlers::repeat_last(state),
            Intent::StopSession => handlers::farewell(&self.config.skill_name),
        }
    }

    /// Stores the spoken text so a later repeat request replays it verbatim.
    fn remember(mut response: Response) -> Response {
        response.session_state.last_utterance = Some(response.spoken_text.clone());
        response
    }
}
