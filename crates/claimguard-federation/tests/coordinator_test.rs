//! Coordinator behavior: dedup, gating, aggregation, reset, persistence.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use claimguard_core::config::{FederationConfig, NodeSpec};
use claimguard_core::errors::{FederationError, StorageError};
use claimguard_core::models::{ClaimStatus, CoordinatorSnapshot, FinalizedClaim};
use claimguard_core::traits::{IRandomSource, IStateStore};
use claimguard_federation::coordinator::{MSG_NO_DATA, MSG_NO_NEW_CLAIMS};
use claimguard_federation::Coordinator;

/// Replays scripted node picks; training noise is always zero.
struct Scripted {
    picks: VecDeque<usize>,
}

impl Scripted {
    fn new(picks: &[usize]) -> Box<Self> {
        Box::new(Self {
            picks: picks.iter().copied().collect(),
        })
    }
}

impl IRandomSource for Scripted {
    fn uniform(&mut self, _low: f64, _high: f64) -> f64 {
        0.0
    }
    fn choose_index(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }
}

#[derive(Clone, Default)]
struct SharedStore {
    slot: Arc<Mutex<Option<CoordinatorSnapshot>>>,
    saves: Arc<Mutex<usize>>,
}

impl IStateStore for SharedStore {
    fn load(&self) -> Result<Option<CoordinatorSnapshot>, StorageError> {
        Ok(self.slot.lock().unwrap().clone())
    }
    fn save(&self, snapshot: &CoordinatorSnapshot) -> Result<(), StorageError> {
        *self.slot.lock().unwrap() = Some(snapshot.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
    fn name(&self) -> &str {
        "shared"
    }
}

struct BrokenStore;

impl IStateStore for BrokenStore {
    fn load(&self) -> Result<Option<CoordinatorSnapshot>, StorageError> {
        Err(StorageError::CorruptSnapshot {
            details: "truncated".into(),
        })
    }
    fn save(&self, _snapshot: &CoordinatorSnapshot) -> Result<(), StorageError> {
        Err(StorageError::Io {
            path: "/nowhere".into(),
            reason: "read-only".into(),
        })
    }
    fn name(&self) -> &str {
        "broken"
    }
}

fn roster() -> Vec<NodeSpec> {
    FederationConfig::default().nodes
}

fn claim(id: u64, status: ClaimStatus) -> FinalizedClaim {
    FinalizedClaim {
        id,
        status,
        amount: 10_000.0,
        description: "Outpatient consultation and medication".into(),
        claim_type: "Outpatient".into(),
        fraud_probability: 0.3,
        ml_confidence: 0.0,
    }
}

fn coordinator(store: SharedStore, picks: &[usize]) -> Coordinator {
    Coordinator::new(&roster(), Box::new(store), Scripted::new(picks), 10).unwrap()
}

#[test]
fn roster_is_validated() {
    let err = Coordinator::new(&[], Box::new(SharedStore::default()), Scripted::new(&[]), 10);
    assert!(matches!(err, Err(FederationError::EmptyRoster)));

    let dup = vec![NodeSpec::new(1, "a"), NodeSpec::new(1, "b")];
    let err = Coordinator::new(&dup, Box::new(SharedStore::default()), Scripted::new(&[]), 10);
    assert!(matches!(err, Err(FederationError::DuplicateNode(1))));
}

#[test]
fn cold_start_defaults() {
    let c = coordinator(SharedStore::default(), &[]);
    let status = c.status();
    assert_eq!(status.rounds_completed, 0);
    assert_eq!(status.global_accuracy, 0.75);
    assert_eq!(status.total_nodes, 5);
    assert!(!status.can_train);
    assert_eq!(status.status_message, "no claims processed yet");
}

#[test]
fn duplicate_ids_in_one_batch_count_once() {
    let mut c = coordinator(SharedStore::default(), &[0, 3]);
    let batch = [claim(42, ClaimStatus::Approved), claim(42, ClaimStatus::Rejected)];
    assert_eq!(c.ingest(&batch), 1);
    assert_eq!(c.total_samples(), 1);
    assert_eq!(c.nodes()[0].sample_count(), 1);
    assert_eq!(c.nodes()[3].sample_count(), 0);
}

#[test]
fn reingesting_changes_nothing() {
    let store = SharedStore::default();
    let mut c = coordinator(store.clone(), &[1, 2]);
    assert_eq!(c.ingest(&[claim(1, ClaimStatus::Approved)]), 1);
    let saves = *store.saves.lock().unwrap();

    assert_eq!(c.ingest(&[claim(1, ClaimStatus::Approved)]), 0);
    assert_eq!(c.total_samples(), 1);
    assert!(c.nodes()[1].holds(1));
    assert!(!c.nodes()[2].holds(1));
    assert_eq!(*store.saves.lock().unwrap(), saves, "no write without new claims");
}

#[test]
fn pending_claims_are_ignored() {
    let mut c = coordinator(SharedStore::default(), &[]);
    let accepted = c.ingest(&[claim(1, ClaimStatus::Pending), claim(2, ClaimStatus::Other)]);
    assert_eq!(accepted, 0);
    assert!(!c.is_processed(1));
}

#[test]
fn round_requires_data() {
    let mut c = coordinator(SharedStore::default(), &[]);
    let outcome = c.train_round(None);
    assert!(!outcome.success);
    assert_eq!(outcome.message, MSG_NO_DATA);
    assert_eq!(outcome.nodes_participated, 0);
    assert_eq!(outcome.round, 0);
}

#[test]
fn second_round_without_new_claims_is_gated() {
    let mut c = coordinator(SharedStore::default(), &[0, 1, 1]);
    let batch = [
        claim(1, ClaimStatus::Approved),
        claim(2, ClaimStatus::Rejected),
        claim(3, ClaimStatus::Approved),
    ];
    let first = c.train_round(Some(&batch));
    assert!(first.success);
    assert_eq!(first.round, 1);
    assert_eq!(first.new_claims_loaded, 3);
    assert_eq!(first.nodes_participated, 2);

    let second = c.train_round(Some(&batch));
    assert!(!second.success);
    assert_eq!(second.message, MSG_NO_NEW_CLAIMS);
    assert_eq!(second.nodes_participated, 0);
    assert_eq!(second.round, 1);
    assert_eq!(c.status().status_message, "all claims have been trained");
}

#[test]
fn global_accuracy_is_weighted_by_samples() {
    // Node 0 gets 1 sample (0.76), node 1 gets 3 samples (0.78).
    let mut c = coordinator(SharedStore::default(), &[0, 1, 1, 1]);
    let batch: Vec<_> = (1..=4).map(|id| claim(id, ClaimStatus::Approved)).collect();
    let outcome = c.train_round(Some(&batch));
    assert!(outcome.success);

    let expected = (0.76 * 1.0 + 0.78 * 3.0) / 4.0;
    assert!((outcome.global_accuracy - expected).abs() < 1e-12);
    assert_eq!(outcome.total_samples, 4);
    assert_eq!(outcome.participants.len(), 2);
}

#[test]
fn status_reports_available_samples() {
    let mut c = coordinator(SharedStore::default(), &[0, 1, 2]);
    c.train_round(Some(&[claim(1, ClaimStatus::Approved)]));
    c.ingest(&[claim(2, ClaimStatus::Rejected), claim(3, ClaimStatus::Approved)]);

    let status = c.status();
    assert_eq!(status.new_samples_available, 2);
    assert!(status.can_train);
    assert_eq!(status.status_message, "2 new finalized claims available for training");
    assert_eq!(status.active_nodes, 3);
    assert_eq!(status.processed_claims_count, 3);
    assert_eq!(status.training_history.len(), 1);
}

#[test]
fn status_history_is_limited() {
    let mut c = Coordinator::new(
        &roster(),
        Box::new(SharedStore::default()),
        Scripted::new(&[]),
        2,
    )
    .unwrap();
    for id in 1..=4 {
        assert!(c.train_round(Some(&[claim(id, ClaimStatus::Approved)])).success);
    }
    let status = c.status();
    assert_eq!(status.training_history.len(), 2);
    assert_eq!(status.training_history[0].round, 3);
    assert_eq!(c.history().training_history.len(), 4);
    assert_eq!(c.history().total_rounds, 4);
}

#[test]
fn reset_restores_defaults_and_persists() {
    let store = SharedStore::default();
    let mut c = coordinator(store.clone(), &[]);
    c.train_round(Some(&[claim(1, ClaimStatus::Approved)]));
    c.reset();

    assert_eq!(c.total_samples(), 0);
    assert_eq!(c.rounds_completed(), 0);
    assert_eq!(c.global_accuracy(), 0.75);
    assert!(c.history().training_history.is_empty());
    assert!(c.nodes().iter().all(|n| n.accuracy() == 0.0));
    assert_eq!(store.slot.lock().unwrap().clone(), Some(CoordinatorSnapshot::default()));

    // A reset claim id can be ingested again.
    assert_eq!(c.ingest(&[claim(1, ClaimStatus::Approved)]), 1);
}

#[test]
fn state_survives_restart_but_samples_do_not() {
    let store = SharedStore::default();
    let mut c = coordinator(store.clone(), &[]);
    c.train_round(Some(&[claim(1, ClaimStatus::Approved), claim(2, ClaimStatus::Approved)]));
    let accuracy = c.global_accuracy();
    drop(c);

    let mut restored = coordinator(store, &[]);
    assert_eq!(restored.rounds_completed(), 1);
    assert_eq!(restored.global_accuracy(), accuracy);
    assert!(restored.is_processed(1));
    assert_eq!(restored.total_samples(), 0);
    assert_eq!(restored.ingest(&[claim(1, ClaimStatus::Approved)]), 0);
}

#[test]
fn storage_failures_never_escape() {
    let mut c = Coordinator::new(&roster(), Box::new(BrokenStore), Scripted::new(&[]), 10).unwrap();
    assert_eq!(c.rounds_completed(), 0);

    let outcome = c.train_round(Some(&[claim(9, ClaimStatus::Rejected)]));
    assert!(outcome.success);
    assert!(c.is_processed(9));
    assert!(c.flush().is_err());
}
