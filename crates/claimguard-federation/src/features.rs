//! Finalized claim → 5-component feature vector.

use claimguard_core::constants::{FEATURE_AMOUNT_CEILING, FEATURE_DESCRIPTION_CEILING};
use claimguard_core::models::{ClaimType, FeatureVector, FinalizedClaim};

pub struct FeatureProjector;

impl FeatureProjector {
    /// Components, in order: amount, prior fraud probability, placeholder
    /// classifier confidence, claim-type scalar, description length.
    pub fn project(claim: &FinalizedClaim) -> FeatureVector {
        let claim_type = ClaimType::from_label(&claim.claim_type)
            .unwrap_or_default()
            .feature_scalar();

        FeatureVector([
            unit(claim.amount / FEATURE_AMOUNT_CEILING),
            unit(claim.fraud_probability),
            unit(claim.ml_confidence / 100.0),
            claim_type,
            unit(claim.description.chars().count() as f64 / FEATURE_DESCRIPTION_CEILING),
        ])
    }
}

fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
