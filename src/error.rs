use thiserror::Error;

/// Errors that can occur while loading or validating the recipe catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Could not read catalog file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(String),

    #[error("Invalid catalog data: {0}")]
    Validation(String),

    #[error("Catalog artifact error: {0}")]
    Artifact(String),
}

/// Errors that can occur while loading the runtime configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse config JSON: {0}")]
    Parse(String),
}

/// Errors that are fatal for a single dialogue turn.
///
/// Everything the user can recover from (missing slot, empty ledger, no match,
/// no selected recipe) is answered with spoken text instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialogueError {
    #[error("Intent request carried no intent name")]
    MissingIntent,

    #[error("Unrecognized intent '{0}'")]
    UnrecognizedIntent(String),
}

/// Errors raised while translating a platform event into a core request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Failed to parse event JSON: {0}")]
    Parse(String),

    #[error("Unsupported request type '{0}'")]
    UnsupportedRequestType(String),

    #[error("Event targets application '{found}', expected '{expected}'")]
    ApplicationMismatch { expected: String, found: String },

    #[error(transparent)]
    Dialogue(#[from] DialogueError),
}
