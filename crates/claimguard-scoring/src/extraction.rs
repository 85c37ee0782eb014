//! Base-score extraction from narrative text.
//!
//! Patterns are tried in a fixed order and the first match wins, so a text
//! carrying both "FRAUD RISK ASSESSMENT: 20%" and "RISK SCORE: 90%" scores 0.20.

use std::sync::LazyLock;

use claimguard_core::constants::NEUTRAL_BASE_SCORE;
use regex::Regex;
use tracing::debug;

/// A labeled-percentage pattern.
pub struct ScorePattern {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! score_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

score_pattern!(RE_FRAUD_RISK_ASSESSMENT, r"(?i)FRAUD RISK ASSESSMENT:\s*(\d+)%");
score_pattern!(RE_FRAUD_RISK_SCORE, r"(?i)FRAUD RISK SCORE:\s*(\d+)%");
score_pattern!(RE_RISK_SCORE, r"(?i)RISK SCORE:\s*(\d+)%");
score_pattern!(RE_FRAUD_PROBABILITY, r"(?i)FRAUD PROBABILITY:\s*(\d+)%");

/// All score patterns in match order.
pub fn all_patterns() -> [ScorePattern; 4] {
    [
        ScorePattern {
            name: "fraud_risk_assessment",
            regex: &RE_FRAUD_RISK_ASSESSMENT,
        },
        ScorePattern {
            name: "fraud_risk_score",
            regex: &RE_FRAUD_RISK_SCORE,
        },
        ScorePattern {
            name: "risk_score",
            regex: &RE_RISK_SCORE,
        },
        ScorePattern {
            name: "fraud_probability",
            regex: &RE_FRAUD_PROBABILITY,
        },
    ]
}

/// Parses a narrative analysis into a base risk score.
pub struct ScoreExtractor;

impl ScoreExtractor {
    /// The first labeled percentage found, as a fraction. Not clamped.
    pub fn extract(text: &str) -> Option<f64> {
        for pattern in all_patterns() {
            let Some(regex) = pattern.regex.as_ref() else {
                continue;
            };
            let Some(caps) = regex.captures(text) else {
                continue;
            };
            let Some(value) = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok()) else {
                continue;
            };
            let score = value / 100.0;
            debug!(pattern = pattern.name, score, "extracted narrative score");
            return Some(score);
        }
        None
    }

    /// Extracted score, or the neutral 0.5 when nothing matches.
    pub fn base_score(text: &str) -> f64 {
        Self::extract(text).unwrap_or(NEUTRAL_BASE_SCORE)
    }
}
