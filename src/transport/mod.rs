//! Translation between the voice platform's JSON envelope and the dialogue core.
//!
//! The core only ever sees [`Request`] and [`Response`]; version stamps, cards and
//! speech wrappers are added here.
pub mod envelope;

pub use envelope::*;

use crate::dialogue::{Request, RequestKind, Response, Router};
use crate::error::TransportError;
use crate::session::SessionState;

/// Converts a platform event into a core request.
pub fn parse_event(event: Event) -> Result<Request, TransportError> {
    let kind = match event.request.kind.as_str() {
        "LaunchRequest" => RequestKind::LaunchRequest,
        "IntentRequest" => RequestKind::IntentRequest,
        "SessionEndedRequest" => RequestKind::SessionEndedRequest,
        "SessionStartedRequest" => RequestKind::SessionStarted,
        other => return Err(TransportError::UnsupportedRequestType(other.to_string())),
    };

    let session_state = event
        .session
        .attributes
        .as_ref()
        .map(SessionState::from_attributes)
        .unwrap_or_default();

    let mut request = Request::new(kind)
        .with_state(session_state)
        .with_ids(event.request.request_id, event.session.session_id);
    request.session_is_new = event.session.new;

    if let Some(intent) = event.request.intent {
        request.intent_name = Some(intent.name);
        for (key, slot) in intent.slots.unwrap_or_default() {
            if let Some(value) = slot.value {
                let name = if slot.name.is_empty() { key } else { slot.name };
                request.slots.insert(name, value);
            }
        }
    }

    Ok(request)
}

/// Wraps a core response into the outbound envelope.
pub fn build_envelope(response: Response) -> ResponseEnvelope {
    let reprompt = response.reprompt_text.map(|text| Reprompt {
        output_speech: OutputSpeech::plain_text(text),
    });

    ResponseEnvelope {
        version: ENVELOPE_VERSION.to_string(),
        session_attributes: response.session_state.to_attributes(),
        response: SpeechletResponse {
            output_speech: OutputSpeech::plain_text(response.spoken_text.clone()),
            card: Card {
                kind: "Simple".to_string(),
                title: response.card_title,
                content: response.spoken_text,
            },
            reprompt,
            should_end_session: response.should_end_session,
        },
    }
}

/// Runs one platform event through the router.
///
/// Returns `Ok(None)` for notifications that take no reply.
pub fn handle_event(router: &Router, event: Event) -> Result<Option<ResponseEnvelope>, TransportError> {
    if let Some(expected) = &router.config().application_id {
        let found = event
            .session
            .application
            .as_ref()
            .map(|app| app.application_id.as_str())
            .unwrap_or_default();
        if found != expected {
            return Err(TransportError::ApplicationMismatch {
                expected: expected.clone(),
                found: found.to_string(),
            });
        }
    }

    let request = parse_event(event)?;
    Ok(router.handle(request)?.map(build_envelope))
}

/// Same as [`handle_event`], starting from the raw JSON body.
pub fn handle_json(router: &Router, body: &str) -> Result<Option<ResponseEnvelope>, TransportError> {
    let event: Event =
        serde_json::from_str(body).map_err(|e| TransportError::Parse(e.to_string()))?;
    handle_event(router, event)
}
