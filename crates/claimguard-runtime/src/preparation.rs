//! Ledger-facing record built from an assessment.

use claimguard_core::constants::{PLACEHOLDER_FRAUD_TYPE, PLACEHOLDER_ML_CONFIDENCE};
use claimguard_core::models::{AiDecision, ClaimPreparation, FraudAssessment};
use claimguard_core::traits::IRandomSource;

pub const CLAIM_NUMBER_PREFIX: &str = "CLM";
const CLAIM_NUMBER_MIN: usize = 100_000;
const CLAIM_NUMBER_SPAN: usize = 900_000;

/// `CLM` followed by a random number in `100000..=999999`.
pub fn claim_number(rng: &mut dyn IRandomSource) -> String {
    let n = CLAIM_NUMBER_MIN + rng.choose_index(CLAIM_NUMBER_SPAN);
    format!("{CLAIM_NUMBER_PREFIX}{n}")
}

/// Fraud probability as a truncated integer percent.
pub fn fraud_score_percent(probability: f64) -> u8 {
    (probability.clamp(0.0, 1.0) * 100.0).floor() as u8
}

pub fn prepare(claim_number: String, assessment: FraudAssessment) -> ClaimPreparation {
    let ai_decision = if assessment.is_fraud {
        AiDecision::Flagged
    } else {
        AiDecision::Approved
    };
    ClaimPreparation {
        claim_number,
        fraud_score: fraud_score_percent(assessment.fraud_probability),
        is_fraudulent: assessment.is_fraud,
        ai_decision,
        ml_fraud_type: PLACEHOLDER_FRAUD_TYPE.to_string(),
        ml_confidence: PLACEHOLDER_ML_CONFIDENCE,
        proof_files_count: assessment.proof_file_count,
        assessment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Index(usize);

    impl IRandomSource for Index {
        fn uniform(&mut self, low: f64, _high: f64) -> f64 {
            low
        }
        fn choose_index(&mut self, len: usize) -> usize {
            self.0.min(len - 1)
        }
    }

    #[test]
    fn claim_number_range() {
        assert_eq!(claim_number(&mut Index(0)), "CLM100000");
        assert_eq!(claim_number(&mut Index(usize::MAX)), "CLM999999");
    }

    #[test]
    fn fraud_score_truncates() {
        assert_eq!(fraud_score_percent(0.135), 13);
        assert_eq!(fraud_score_percent(0.999), 99);
        assert_eq!(fraud_score_percent(1.0), 100);
        assert_eq!(fraud_score_percent(0.0), 0);
    }
}
