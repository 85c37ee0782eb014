use serde::{Deserialize, Serialize};

use super::FraudAssessment;

/// Automated verdict attached to a prepared claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AiDecision {
    Flagged,
    Approved,
}

/// Scored claim ready for the ledger collaborator to store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimPreparation {
    /// `CLM` followed by six digits.
    pub claim_number: String,
    /// Fraud probability as a truncated integer percent.
    pub fraud_score: u8,
    pub is_fraudulent: bool,
    pub ai_decision: AiDecision,
    pub ml_fraud_type: String,
    pub ml_confidence: f64,
    pub proof_files_count: usize,
    pub assessment: FraudAssessment,
}
