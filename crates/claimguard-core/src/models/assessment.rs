use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coarse risk band derived from the fraud probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// `< 0.35` LOW, `[0.35, 0.65)` MEDIUM, `>= 0.65` HIGH.
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.35 {
            Self::Low
        } else if probability < 0.65 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of scoring one claim. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudAssessment {
    pub is_fraud: bool,
    pub fraud_probability: f64,
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub indicators: Vec<String>,
    /// Narrative service text, or the synthesized advisory report on fallback.
    pub narrative: String,
    pub proof_file_count: usize,
    pub narrative_success: bool,
    pub model_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Counters and flags describing the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    pub model_version: String,
    pub model_type: String,
    pub narrative_enabled: bool,
    pub supports_multimodal: bool,
    pub predictions_made: u64,
    pub fallback_predictions: u64,
    pub last_updated: DateTime<Utc>,
}
