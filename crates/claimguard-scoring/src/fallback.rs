//! Deterministic heuristic used when the narrative service is unavailable.
//!
//! The score is a sum of tiers plus a small bounded noise term drawn from the
//! injected [`IRandomSource`]. Because no narrative text exists on this path,
//! a plain-text advisory report is synthesized instead.

use std::fmt::Write as _;

use claimguard_core::models::ClaimInput;
use claimguard_core::traits::IRandomSource;

use crate::adjustment::clamp_unit;
use crate::keywords::{self, MEDICAL_TERMS, SUSPICIOUS_KEYWORDS};

/// Half-width of the uniform noise added to the heuristic.
pub const NOISE: f64 = 0.05;

pub struct FallbackScorer;

impl FallbackScorer {
    /// Heuristic score without noise. May fall outside `[0, 1]`.
    pub fn heuristic(claim: &ClaimInput) -> f64 {
        let suspicious = keywords::count(&claim.description, &SUSPICIOUS_KEYWORDS) as f64;
        let medical = keywords::count(&claim.description, &MEDICAL_TERMS) as f64;

        amount_tier(claim.amount) + description_tier(claim.description_len()) + 0.10 * suspicious
            - 0.05 * medical
    }

    /// Heuristic plus `Uniform(-0.05, 0.05)` noise, clamped to `[0, 1]`.
    pub fn score(claim: &ClaimInput, rng: &mut dyn IRandomSource) -> f64 {
        let noise = rng.uniform(-NOISE, NOISE);
        clamp_unit(Self::heuristic(claim) + noise)
    }

    /// Three independent qualitative checks: amount, documentation, description.
    pub fn advisory_report(claim: &ClaimInput, proof_file_count: usize) -> String {
        let amount = if claim.amount > 100_000.0 {
            "[!] Very high claim amount (>100,000) - requires detailed verification"
        } else if claim.amount > 50_000.0 {
            "[!] High claim amount (>50,000) - standard verification recommended"
        } else {
            "[ok] Claim amount within normal range"
        };

        let documentation = match proof_file_count {
            0 => "[!] CRITICAL: No medical documentation provided - high fraud risk",
            n if n >= 3 => "[ok] Good documentation provided - reduces fraud risk",
            _ => "[!] Limited documentation - additional files recommended",
        };

        let len = claim.description_len();
        let description = if len < 50 {
            "[!] Brief claim description - more details needed"
        } else if len > 150 {
            "[ok] Detailed claim description provided"
        } else {
            "[ok] Adequate claim description"
        };

        [amount, documentation, description].join("\n")
    }

    /// Full replacement for the narrative text on the fallback path.
    pub fn fallback_narrative(claim: &ClaimInput, proof_file_count: usize, failure: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Narrative analysis temporarily unavailable");
        let _ = writeln!(out);
        let _ = writeln!(out, "Error: {failure}");
        let _ = writeln!(out);
        let _ = writeln!(out, "FALLBACK ANALYSIS - Basic Fraud Detection");
        let _ = writeln!(out);
        let _ = writeln!(out, "Claim Summary:");
        let _ = writeln!(out, "- Patient: {}", claim.patient_name);
        let _ = writeln!(out, "- Claim Amount: {}", claim.amount);
        let _ = writeln!(out, "- Claim Type: {}", claim.claim_type);
        let _ = writeln!(out, "- Diagnosis: {}", claim.diagnosis);
        let _ = writeln!(out, "- Description Length: {} characters", claim.description_len());
        let _ = writeln!(out, "- Documentation: {proof_file_count} file(s) uploaded");
        let _ = writeln!(out);
        let _ = writeln!(out, "Automated Risk Assessment:");
        let _ = writeln!(out, "{}", Self::advisory_report(claim, proof_file_count));
        let _ = writeln!(out);
        let _ = write!(
            out,
            "Recommendation: Manual review strongly recommended due to narrative service unavailability."
        );
        out
    }
}

fn amount_tier(amount: f64) -> f64 {
    if amount > 100_000.0 {
        0.40
    } else if amount > 50_000.0 {
        0.30
    } else if amount > 25_000.0 {
        0.15
    } else {
        0.0
    }
}

fn description_tier(len: usize) -> f64 {
    if len < 30 {
        0.30
    } else if len < 100 {
        0.15
    } else {
        0.0
    }
}
