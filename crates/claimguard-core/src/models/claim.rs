use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{ClaimGuardError, ClaimGuardResult};

/// Kind of care a claim covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ClaimType {
    #[default]
    Outpatient,
    Inpatient,
    Emergency,
    Surgery,
}

impl ClaimType {
    pub const ALL: [ClaimType; 4] = [
        Self::Outpatient,
        Self::Inpatient,
        Self::Emergency,
        Self::Surgery,
    ];

    /// Parse a ledger label. Matching is exact, as the ledger stores it.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == label)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Outpatient => "Outpatient",
            Self::Inpatient => "Inpatient",
            Self::Emergency => "Emergency",
            Self::Surgery => "Surgery",
        }
    }

    /// Scalar used as the claim-type feature.
    pub fn feature_scalar(self) -> f64 {
        match self {
            Self::Outpatient => 0.25,
            Self::Inpatient => 0.50,
            Self::Emergency => 0.75,
            Self::Surgery => 1.00,
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A claim as submitted for scoring. Field names follow the ledger's
/// camelCase payload; snake_case keys are accepted too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClaimInput {
    pub amount: f64,
    #[serde(alias = "claim_type", deserialize_with = "lenient_claim_type")]
    pub claim_type: ClaimType,
    pub description: String,
    pub diagnosis: String,
    #[serde(alias = "patient_name")]
    pub patient_name: String,
    #[serde(alias = "policy_number")]
    pub policy_number: String,
    #[serde(alias = "hospital_name")]
    pub hospital_name: String,
}

/// Unknown claim-type labels fall back to the default type.
fn lenient_claim_type<'de, D>(deserializer: D) -> Result<ClaimType, D::Error>
where
    D: Deserializer<'de>,
{
    let label = String::deserialize(deserializer)?;
    Ok(ClaimType::from_label(&label).unwrap_or_default())
}

impl ClaimInput {
    /// Description length in characters, the unit every length rule uses.
    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }

    /// Reject amounts that are negative or not finite.
    pub fn validate(&self) -> ClaimGuardResult<()> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ClaimGuardError::InvalidClaim {
                reason: format!("amount must be a non-negative number, got {}", self.amount),
            });
        }
        Ok(())
    }
}

/// An uploaded proof document. `data` holds the base64-encoded payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofFile {
    pub filename: String,
    pub mimetype: String,
    pub size: u64,
    pub data: String,
}

impl ProofFile {
    /// Build from raw bytes, encoding the payload.
    pub fn from_bytes(
        filename: impl Into<String>,
        mimetype: impl Into<String>,
        bytes: &[u8],
    ) -> Self {
        Self {
            filename: filename.into(),
            mimetype: mimetype.into(),
            size: bytes.len() as u64,
            data: STANDARD.encode(bytes),
        }
    }

    pub fn is_image(&self) -> bool {
        self.mimetype.starts_with("image/")
    }

    pub fn is_pdf(&self) -> bool {
        self.mimetype == "application/pdf"
    }

    pub fn size_kb(&self) -> f64 {
        self.size as f64 / 1024.0
    }
}
