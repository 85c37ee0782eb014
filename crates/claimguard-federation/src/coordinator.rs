//! Round coordinator: dedup, node assignment, gated rounds, aggregation,
//! and snapshot persistence.
//!
//! Two independent guards keep claims from being trained twice: the global
//! processed set (checked before any node is picked) and the round gate
//! (no round unless the total sample count moved since the last one).

use std::collections::{BTreeSet, HashSet};

use chrono::Utc;
use claimguard_core::config::NodeSpec;
use claimguard_core::constants::INITIAL_GLOBAL_ACCURACY;
use claimguard_core::errors::{FederationError, StorageError};
use claimguard_core::models::{
    ClaimId, ClaimLabel, CoordinatorSnapshot, FederationStatus, FinalizedClaim, ParticipantResult,
    RoundOutcome, RoundRecord, TrainingHistory,
};
use claimguard_core::tracing_setup::events;
use claimguard_core::traits::{IRandomSource, IStateStore};
use tracing::{debug, info, warn};

use crate::features::FeatureProjector;
use crate::node::Node;

pub const MSG_NO_DATA: &str = "no training data available";
pub const MSG_NO_NEW_CLAIMS: &str = "no new claims since last round";

pub struct Coordinator {
    nodes: Vec<Node>,
    processed: BTreeSet<ClaimId>,
    rounds: u64,
    global_accuracy: f64,
    last_trained_total: usize,
    history: Vec<RoundRecord>,
    history_limit: usize,
    store: Box<dyn IStateStore>,
    rng: Box<dyn IRandomSource>,
}

impl Coordinator {
    /// Build the fixed roster and restore the last snapshot.
    ///
    /// A missing or unreadable snapshot is a cold start. Node sample sets are
    /// not part of the snapshot and always start empty.
    pub fn new(
        roster: &[NodeSpec],
        store: Box<dyn IStateStore>,
        rng: Box<dyn IRandomSource>,
        history_limit: usize,
    ) -> Result<Self, FederationError> {
        if roster.is_empty() {
            return Err(FederationError::EmptyRoster);
        }
        let mut ids = HashSet::new();
        for spec in roster {
            if !ids.insert(spec.id) {
                return Err(FederationError::DuplicateNode(spec.id));
            }
        }

        let snapshot = match store.load() {
            Ok(Some(snapshot)) => {
                info!(
                    backend = store.name(),
                    rounds = snapshot.training_rounds,
                    processed = snapshot.processed_claims.len(),
                    "coordinator state restored"
                );
                snapshot
            }
            Ok(None) => {
                debug!(backend = store.name(), "no stored state, cold start");
                CoordinatorSnapshot::default()
            }
            Err(e) => {
                warn!(backend = store.name(), error = %e, "state load failed, cold start");
                CoordinatorSnapshot::default()
            }
        };

        Ok(Self {
            nodes: roster.iter().map(Node::from_spec).collect(),
            processed: snapshot.processed_claims,
            rounds: snapshot.training_rounds,
            global_accuracy: snapshot.global_model_accuracy,
            last_trained_total: snapshot.last_trained_sample_total,
            history: Vec::new(),
            history_limit,
            store,
            rng,
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn rounds_completed(&self) -> u64 {
        self.rounds
    }

    pub fn global_accuracy(&self) -> f64 {
        self.global_accuracy
    }

    pub fn is_processed(&self, claim_id: ClaimId) -> bool {
        self.processed.contains(&claim_id)
    }

    pub fn total_samples(&self) -> usize {
        self.nodes.iter().map(Node::sample_count).sum()
    }

    pub fn snapshot(&self) -> CoordinatorSnapshot {
        CoordinatorSnapshot {
            processed_claims: self.processed.clone(),
            training_rounds: self.rounds,
            global_model_accuracy: self.global_accuracy,
            last_trained_sample_total: self.last_trained_total,
        }
    }

    /// Assign newly finalized claims to nodes. Returns how many were accepted.
    ///
    /// Non-finalized claims and ids already processed are skipped; duplicates
    /// inside one batch are accepted once.
    pub fn ingest(&mut self, claims: &[FinalizedClaim]) -> usize {
        let mut accepted = 0;
        for claim in claims {
            let Some(label) = ClaimLabel::from_status(claim.status) else {
                continue;
            };
            if self.processed.contains(&claim.id) {
                continue;
            }

            let features = FeatureProjector::project(claim);
            let idx = self.rng.choose_index(self.nodes.len());
            let Some(node) = self.nodes.get_mut(idx) else {
                continue;
            };
            if node.add_sample(claim.id, features, label) {
                self.processed.insert(claim.id);
                events::claim_ingested(claim.id, node.id(), label == ClaimLabel::Fraudulent);
                accepted += 1;
            }
        }

        if accepted > 0 {
            self.persist();
        }
        accepted
    }

    /// Optionally ingest `claims`, then run one round if the sample total grew.
    pub fn train_round(&mut self, claims: Option<&[FinalizedClaim]>) -> RoundOutcome {
        let new_claims_loaded = claims.map_or(0, |batch| self.ingest(batch));
        let total = self.total_samples();

        if total == 0 {
            return self.skipped(MSG_NO_DATA, new_claims_loaded, total);
        }
        if total == self.last_trained_total {
            return self.skipped(MSG_NO_NEW_CLAIMS, new_claims_loaded, total);
        }

        self.rounds += 1;
        self.last_trained_total = total;

        let mut participants = Vec::new();
        for node in self.nodes.iter_mut().filter(|n| n.sample_count() > 0) {
            let accuracy = node.train_local(self.rng.as_mut());
            participants.push(ParticipantResult {
                node_id: node.id(),
                name: node.name().to_string(),
                accuracy,
                samples: node.sample_count(),
            });
        }
        self.global_accuracy = weighted_accuracy(&participants);

        let timestamp = Utc::now();
        self.history.push(RoundRecord {
            round: self.rounds,
            timestamp,
            global_accuracy: self.global_accuracy,
            nodes_participated: participants.len(),
            total_samples: total,
            new_claims_loaded,
            participants: participants.clone(),
        });
        events::round_completed(self.rounds, self.global_accuracy, participants.len(), total);
        self.persist();

        RoundOutcome {
            success: true,
            message: format!("round {} completed", self.rounds),
            round: self.rounds,
            new_claims_loaded,
            total_samples: total,
            global_accuracy: self.global_accuracy,
            nodes_participated: participants.len(),
            participants,
            timestamp: Some(timestamp),
        }
    }

    pub fn status(&self) -> FederationStatus {
        let total = self.total_samples();
        let available = total.saturating_sub(self.last_trained_total);
        let status_message = if available > 0 {
            format!("{available} new finalized claims available for training")
        } else if total == 0 {
            "no claims processed yet".to_string()
        } else {
            "all claims have been trained".to_string()
        };
        let skip = self.history.len().saturating_sub(self.history_limit);

        FederationStatus {
            rounds_completed: self.rounds,
            global_accuracy: self.global_accuracy,
            total_nodes: self.nodes.len(),
            active_nodes: self.nodes.iter().filter(|n| n.sample_count() > 0).count(),
            total_training_samples: total,
            processed_claims_count: self.processed.len(),
            new_samples_available: available,
            can_train: available > 0,
            status_message,
            nodes: self.nodes.iter().map(Node::summary).collect(),
            training_history: self.history[skip..].to_vec(),
        }
    }

    pub fn history(&self) -> TrainingHistory {
        TrainingHistory {
            training_history: self.history.clone(),
            total_rounds: self.rounds,
            current_accuracy: self.global_accuracy,
        }
    }

    /// Forget everything: processed ids, rounds, history, and node samples.
    pub fn reset(&mut self) {
        self.processed.clear();
        self.rounds = 0;
        self.global_accuracy = INITIAL_GLOBAL_ACCURACY;
        self.last_trained_total = 0;
        self.history.clear();
        for node in &mut self.nodes {
            node.reset();
        }
        events::state_reset(self.nodes.len());
        self.persist();
    }

    /// Write the snapshot now, surfacing any storage error.
    pub fn flush(&self) -> Result<(), StorageError> {
        self.store.save(&self.snapshot())
    }

    fn skipped(&self, reason: &str, new_claims_loaded: usize, total: usize) -> RoundOutcome {
        events::round_skipped(reason, total);
        RoundOutcome {
            success: false,
            message: reason.to_string(),
            round: self.rounds,
            new_claims_loaded,
            total_samples: total,
            global_accuracy: self.global_accuracy,
            nodes_participated: 0,
            participants: Vec::new(),
            timestamp: None,
        }
    }

    /// Mutate-then-snapshot. A failed write leaves the in-memory state as is.
    fn persist(&self) {
        if let Err(e) = self.flush() {
            events::state_persist_failed(self.store.name(), &e.to_string());
        }
    }
}

/// Σ(accuracy × samples) / Σ(samples). 0 when nobody participated.
pub fn weighted_accuracy(participants: &[ParticipantResult]) -> f64 {
    let samples: usize = participants.iter().map(|p| p.samples).sum();
    if samples == 0 {
        return 0.0;
    }
    let weighted: f64 = participants
        .iter()
        .map(|p| p.accuracy * p.samples as f64)
        .sum();
    weighted / samples as f64
}
