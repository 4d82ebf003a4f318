//! Analysis service settings

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Checked when the configured variable is unset
pub const FALLBACK_KEY_VAR: &str = "GEMINI_API_KEY";

/// Settings for the Gemini analysis service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Base URL of the generative language API
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            timeout_secs: 30,
            api_key_env: "API_KEY".to_string(),
        }
    }
}

impl AnalysisConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// URL of the `generateContent` call for the configured model
    pub fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    /// Read the API key from the environment. Empty values count as unset.
    pub fn api_key(&self) -> Option<String> {
        [self.api_key_env.as_str(), FALLBACK_KEY_VAR]
            .into_iter()
            .filter_map(|var| std::env::var(var).ok())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
