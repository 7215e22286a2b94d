use crate::session::SessionAttributes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// --- Inbound ---

/// A raw platform event as delivered to the skill endpoint.
#[derive(Debug, Deserialize)]
pub struct Event {
    pub session: EventSession,
    pub request: EventRequest,
}

#[derive(Debug, Deserialize)]
pub struct EventSession {
    #[serde(default)]
    pub new: bool,
    #[serde(default, alias = "sessionId")]
    pub session_id: String,
    #[serde(default)]
    pub application: Option<EventApplication>,
    #[serde(default)]
    pub attributes: Option<SessionAttributes>,
}

#[derive(Debug, Deserialize)]
pub struct EventApplication {
    #[serde(alias = "applicationId")]
    pub application_id: String,
}

#[derive(Debug, Deserialize)]
pub struct EventRequest {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, alias = "requestId")]
    pub request_id: String,
    #[serde(default)]
    pub intent: Option<EventIntent>,
}

#[derive(Debug, Deserialize)]
pub struct EventIntent {
    pub name: String,
    #[serde(default)]
    pub slots: Option<HashMap<String, EventSlot>>,
}

#[derive(Debug, Deserialize)]
pub struct EventSlot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

// --- Outbound ---

pub const ENVELOPE_VERSION: &str = "1.0";

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: SessionAttributes,
    pub response: SpeechletResponse,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpeechletResponse {
    pub output_speech: OutputSpeech,
    pub card: Card,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl OutputSpeech {
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            kind: "PlainText".to_string(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Card {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}
