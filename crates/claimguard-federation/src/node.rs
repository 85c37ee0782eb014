//! One simulated training participant.

use std::collections::HashSet;

use claimguard_core::config::NodeSpec;
use claimguard_core::models::{
    ClaimId, ClaimLabel, FeatureVector, NodeId, NodeSummary, TrainingSample,
};
use claimguard_core::traits::IRandomSource;

/// Accuracy before any sample has been seen.
pub const BASE_ACCURACY: f64 = 0.75;
/// Upper bound on the simulated local accuracy.
pub const MAX_ACCURACY: f64 = 0.98;
/// Accuracy gained per sample, capped at [`MAX_SAMPLE_BONUS`].
pub const PER_SAMPLE_BONUS: f64 = 0.01;
pub const MAX_SAMPLE_BONUS: f64 = 0.20;
/// Half-width of the uniform training noise.
pub const TRAINING_NOISE: f64 = 0.03;

#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: String,
    samples: Vec<TrainingSample>,
    held: HashSet<ClaimId>,
    accuracy: f64,
}

impl Node {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            samples: Vec::new(),
            held: HashSet::new(),
            accuracy: 0.0,
        }
    }

    pub fn from_spec(spec: &NodeSpec) -> Self {
        Self::new(spec.id, spec.name.clone())
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }

    pub fn holds(&self, claim_id: ClaimId) -> bool {
        self.held.contains(&claim_id)
    }

    /// Returns `false` and changes nothing if `claim_id` is already held.
    pub fn add_sample(&mut self, claim_id: ClaimId, features: FeatureVector, label: ClaimLabel) -> bool {
        if !self.held.insert(claim_id) {
            return false;
        }
        self.samples.push(TrainingSample {
            claim_id,
            features,
            label,
        });
        true
    }

    /// Recompute the simulated local accuracy from the current sample count.
    /// A node without samples stays at 0.
    pub fn train_local(&mut self, rng: &mut dyn IRandomSource) -> f64 {
        let n = self.samples.len();
        if n == 0 {
            self.accuracy = 0.0;
            return self.accuracy;
        }
        let bonus = (n as f64 * PER_SAMPLE_BONUS).min(MAX_SAMPLE_BONUS);
        let noise = rng.uniform(-TRAINING_NOISE, TRAINING_NOISE);
        self.accuracy = (BASE_ACCURACY + bonus + noise).min(MAX_ACCURACY);
        self.accuracy
    }

    pub fn reset(&mut self) {
        self.samples.clear();
        self.held.clear();
        self.accuracy = 0.0;
    }

    pub fn summary(&self) -> NodeSummary {
        NodeSummary {
            node_id: self.id,
            name: self.name.clone(),
            samples: self.samples.len(),
            accuracy: self.accuracy,
        }
    }
}
