//! Risk classification and the traditional indicator flags.

use claimguard_core::models::{ClaimInput, RiskLevel};

use crate::keywords::{self, SUSPICIOUS_KEYWORDS};

pub const HIGH_AMOUNT_THRESHOLD: f64 = 75_000.0;
pub const INSUFFICIENT_DESCRIPTION_LEN: usize = 50;

/// Derived view of a calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub is_fraud: bool,
    pub confidence: f64,
    pub risk_level: RiskLevel,
}

impl Classification {
    /// Expects a probability already passed through [`round_score`].
    pub fn from_probability(probability: f64) -> Self {
        Self {
            is_fraud: probability > 0.5,
            confidence: confidence(probability),
            risk_level: RiskLevel::from_probability(probability),
        }
    }
}

/// Round to four decimals. Reported scores and their bands are derived from
/// the rounded value, so `0.40 + 0.30 - 0.05` lands on 0.65 and not just below it.
pub fn round_score(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Distance from the undecided midpoint, scaled to `[0, 1]` and rounded.
pub fn confidence(probability: f64) -> f64 {
    round_score(((probability - 0.5).abs() * 2.0).clamp(0.0, 1.0))
}

/// Rule-based flags computed on every claim, independent of the score.
pub fn traditional_indicators(claim: &ClaimInput) -> Vec<String> {
    let mut indicators = Vec::new();

    if claim.amount > HIGH_AMOUNT_THRESHOLD {
        indicators.push("High claim amount requiring verification".to_string());
    }
    if claim.description_len() < INSUFFICIENT_DESCRIPTION_LEN {
        indicators.push("Insufficient claim description".to_string());
    }
    let found = keywords::matched(&claim.description, &SUSPICIOUS_KEYWORDS);
    if !found.is_empty() {
        indicators.push(format!("Suspicious keywords detected: {}", found.join(", ")));
    }

    indicators
}
