use serde::{Deserialize, Serialize};

use super::defaults;

/// Scoring subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Maximum number of proof files considered for narrative attachment.
    pub max_attachments: usize,
    /// Version string stamped on every assessment.
    pub model_version: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_attachments: defaults::DEFAULT_MAX_ATTACHMENTS,
            model_version: defaults::DEFAULT_MODEL_VERSION.to_string(),
        }
    }
}
