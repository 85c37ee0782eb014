use serde::{Deserialize, Serialize};

use crate::constants::FEATURE_DIMENSIONS;

/// Ledger identifier of a claim.
pub type ClaimId = u64;

/// Identifier of a federated node.
pub type NodeId = u32;

/// Lifecycle status of a claim on the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Other,
}

impl ClaimStatus {
    /// Only approved or rejected claims carry a training label.
    pub fn is_finalized(self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }
}

/// Summary of a ledger claim, as supplied for ingestion.
///
/// The ledger sends camelCase keys and calls the probability `fraudScore`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizedClaim {
    pub id: ClaimId,
    pub status: ClaimStatus,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    /// Raw ledger label; unknown labels are tolerated.
    #[serde(default, alias = "claim_type")]
    pub claim_type: String,
    /// Fraud probability computed when the claim was scored.
    #[serde(rename = "fraudScore", alias = "fraudProbability", alias = "fraud_probability")]
    pub fraud_probability: f64,
    /// Placeholder classifier confidence on a 0-100 scale.
    #[serde(default, alias = "ml_confidence")]
    pub ml_confidence: f64,
}

/// Training label. Rejected claims are treated as fraudulent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimLabel {
    Legitimate,
    Fraudulent,
}

impl ClaimLabel {
    /// `None` for statuses that are not finalized.
    pub fn from_status(status: ClaimStatus) -> Option<Self> {
        match status {
            ClaimStatus::Approved => Some(Self::Legitimate),
            ClaimStatus::Rejected => Some(Self::Fraudulent),
            ClaimStatus::Pending | ClaimStatus::Other => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Self::Legitimate => 0,
            Self::Fraudulent => 1,
        }
    }
}

/// Fixed-length numeric encoding of a finalized claim. Every component is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector(pub [f64; FEATURE_DIMENSIONS]);

impl FeatureVector {
    pub fn is_normalized(&self) -> bool {
        self.0.iter().all(|v| (0.0..=1.0).contains(v))
    }
}

/// One claim held by exactly one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub claim_id: ClaimId,
    pub features: FeatureVector,
    pub label: ClaimLabel,
}
