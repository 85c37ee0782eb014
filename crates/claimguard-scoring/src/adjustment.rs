//! Ordered deterministic corrections applied to the extracted base score.
//!
//! The order is part of the contract: later rules may undo earlier floors
//! (the "approve + legitimate" cap runs after the "reject" floor, the
//! documentation multiplier runs after both). Only the final step clamps.

use tracing::debug;

/// Facts about the claim the rules look at.
#[derive(Debug, Clone, Copy)]
pub struct AdjustmentInput<'a> {
    pub narrative: &'a str,
    pub proof_file_count: usize,
    pub description_len: usize,
}

/// Which rule moved the score, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedRule {
    RejectFloor,
    ReviewFloor,
    ApproveCap,
    NoDocumentsFloor,
    DocumentedDiscount,
    DetailedDescriptionDiscount,
    BriefDescriptionFloor,
    Clamp,
}

/// Applies the keyword, documentation, and description rules.
pub struct RuleAdjuster;

impl RuleAdjuster {
    pub const REJECT_FLOOR: f64 = 0.70;
    pub const REVIEW_FLOOR: f64 = 0.50;
    pub const APPROVE_CAP: f64 = 0.30;
    pub const NO_DOCUMENTS_FLOOR: f64 = 0.65;
    pub const DOCUMENTED_FACTOR: f64 = 0.75;
    pub const DOCUMENTED_MIN_FILES: usize = 3;
    pub const DETAILED_FACTOR: f64 = 0.90;
    pub const DETAILED_MIN_LEN: usize = 150;
    pub const BRIEF_FLOOR: f64 = 0.55;
    pub const BRIEF_MAX_LEN: usize = 50;

    /// Calibrated fraud probability in `[0, 1]`.
    pub fn adjust(base: f64, input: AdjustmentInput<'_>) -> f64 {
        Self::adjust_with_trace(base, input).0
    }

    /// Same as [`RuleAdjuster::adjust`], also reporting which rules changed the score.
    pub fn adjust_with_trace(base: f64, input: AdjustmentInput<'_>) -> (f64, Vec<AppliedRule>) {
        let mut score = base;
        let mut applied = Vec::new();
        let lower = input.narrative.to_lowercase();

        let mut step = |from: f64, to: f64, rule: AppliedRule| -> f64 {
            if to != from {
                debug!(rule = ?rule, from, to, "score adjusted");
                applied.push(rule);
            }
            to
        };

        if lower.contains("reject") || lower.contains("fraudulent") {
            score = step(score, score.max(Self::REJECT_FLOOR), AppliedRule::RejectFloor);
        }
        if lower.contains("requires_review") || lower.contains("suspicious") {
            score = step(score, score.max(Self::REVIEW_FLOOR), AppliedRule::ReviewFloor);
        }
        if lower.contains("approve") && lower.contains("legitimate") {
            score = step(score, score.min(Self::APPROVE_CAP), AppliedRule::ApproveCap);
        }

        if input.proof_file_count == 0 {
            score = step(
                score,
                score.max(Self::NO_DOCUMENTS_FLOOR),
                AppliedRule::NoDocumentsFloor,
            );
        } else if input.proof_file_count >= Self::DOCUMENTED_MIN_FILES {
            score = step(
                score,
                score * Self::DOCUMENTED_FACTOR,
                AppliedRule::DocumentedDiscount,
            );
        }

        if input.description_len > Self::DETAILED_MIN_LEN {
            score = step(
                score,
                score * Self::DETAILED_FACTOR,
                AppliedRule::DetailedDescriptionDiscount,
            );
        } else if input.description_len < Self::BRIEF_MAX_LEN {
            score = step(
                score,
                score.max(Self::BRIEF_FLOOR),
                AppliedRule::BriefDescriptionFloor,
            );
        }

        score = step(score, clamp_unit(score), AppliedRule::Clamp);
        (score, applied)
    }
}

/// Clamp to `[0, 1]`, mapping NaN to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
