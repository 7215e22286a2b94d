use crate::session::SessionState;
use ahash::AHashMap;

/// Slot carrying the ingredient in a `ProvideIngredient` request.
pub const INGREDIENT_SLOT: &str = "Ingredient";

/// The lifecycle event or user action that triggered a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    SessionStarted,
    LaunchRequest,
    IntentRequest,
    SessionEndedRequest,
}

/// A normalized inbound request. Intent recognition has already happened upstream.
#[derive(Debug, Clone)]
pub struct Request {
    pub kind: RequestKind,
    pub intent_name: Option<String>,
    pub slots: AHashMap<String, String>,
    pub session_state: SessionState,
    pub session_is_new: bool,
    pub request_id: String,
    pub session_id: String,
}

impl Request {
    pub fn new(kind: RequestKind) -> Self {
        Self {
            kind,
            intent_name: None,
            slots: AHashMap::new(),
            session_state: SessionState::default(),
            session_is_new: false,
            request_id: String::new(),
            session_id: String::new(),
        }
    }

    pub fn launch() -> Self {
        Self::new(RequestKind::LaunchRequest)
    }

    pub fn intent(name: impl Into<String>) -> Self {
        Self {
            intent_name: Some(name.into()),
            ..Self::new(RequestKind::IntentRequest)
        }
    }

    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    pub fn with_state(mut self, state: SessionState) -> Self {
        self.session_state = state;
        self
    }

    pub fn with_ids(mut self, request_id: impl Into<String>, session_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self.session_id = session_id.into();
        self
    }

    pub fn new_session(mut self) -> Self {
        self.session_is_new = true;
        self
    }

    /// Non-blank value of a slot, trimmed.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }
}

/// A normalized outbound response plus the state to hand back to the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub session_state: SessionState,
    pub card_title: String,
    pub spoken_text: String,
    pub reprompt_text: Option<String>,
    pub should_end_session: bool,
}

impl Response {
    pub fn new(
        session_state: SessionState,
        card_title: impl Into<String>,
        spoken_text: impl Into<String>,
    ) -> Self {
        Self {
            session_state,
            card_title: card_title.into(),
            spoken_text: spoken_text.into(),
            reprompt_text: None,
            should_end_session: false,
        }
    }

    pub fn with_reprompt(mut self, reprompt_text: impl Into<String>) -> Self {
        self.reprompt_text = Some(reprompt_text.into());
        self
    }

    pub fn ending_session(mut self, should_end_session: bool) -> Self {
        self.should_end_session = should_end_session;
        self
    }
}
