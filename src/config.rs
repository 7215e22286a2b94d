use crate::error::ConfigError;
use crate::matcher::MatchPolicy;
use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_SKILL_NAME: &str = "Recipe Helper";

/// Runtime settings for a [`Router`](crate::dialogue::Router).
///
/// Every field has a default, so a config file only needs to name what it changes:
///
/// ```json
/// { "matchPolicy": "substring", "removeLastEnabled": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Name the assistant introduces itself with.
    pub skill_name: String,
    pub match_policy: MatchPolicy,
    /// Whether `RemoveLastIngredient` is offered at all.
    pub remove_last_enabled: bool,
    /// When set, events addressed to any other application are rejected.
    pub application_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skill_name: DEFAULT_SKILL_NAME.to_string(),
            match_policy: MatchPolicy::default(),
            remove_last_enabled: true,
            application_id: None,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a config from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }
}
