use serde::{Deserialize, Serialize};

use super::defaults;

/// Narrative-analysis service configuration.
///
/// Without an `api_key` the service is treated as unavailable and every
/// claim goes through the fallback scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    pub enabled: bool,
    /// Base URL of a Gemini-compatible `generateContent` API.
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_NARRATIVE_ENABLED,
            endpoint: defaults::DEFAULT_NARRATIVE_ENDPOINT.to_string(),
            model: defaults::DEFAULT_NARRATIVE_MODEL.to_string(),
            api_key: None,
            timeout_secs: defaults::DEFAULT_NARRATIVE_TIMEOUT_SECS,
        }
    }
}

impl NarrativeConfig {
    /// Whether a provider can be built from this config.
    pub fn is_usable(&self) -> bool {
        self.enabled && self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}
