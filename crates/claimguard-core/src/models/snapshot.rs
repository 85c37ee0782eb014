use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ClaimId;
use crate::constants::INITIAL_GLOBAL_ACCURACY;

/// Durable coordinator state. Round history and node samples are not part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinatorSnapshot {
    pub processed_claims: BTreeSet<ClaimId>,
    pub training_rounds: u64,
    pub global_model_accuracy: f64,
    pub last_trained_sample_total: usize,
}

impl Default for CoordinatorSnapshot {
    fn default() -> Self {
        Self {
            processed_claims: BTreeSet::new(),
            training_rounds: 0,
            global_model_accuracy: INITIAL_GLOBAL_ACCURACY,
            last_trained_sample_total: 0,
        }
    }
}
