//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields.

use crate::models::{ClaimId, NodeId, RiskLevel};

/// Log a completed assessment.
pub fn assessment_completed(probability: f64, risk_level: RiskLevel, narrative_success: bool) {
    tracing::info!(
        event = "assessment_completed",
        fraud_probability = probability,
        risk_level = %risk_level,
        narrative_success = narrative_success,
        "claim assessed"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a claim accepted into a node.
pub fn claim_ingested(claim_id: ClaimId, node_id: NodeId, fraudulent: bool) {
    tracing::debug!(
        event = "claim_ingested",
        claim_id = claim_id,
        node_id = node_id,
        fraudulent = fraudulent,
        "claim assigned to node"
    );
}

/// Log a completed aggregation round.
pub fn round_completed(round: u64, global_accuracy: f64, nodes: usize, total_samples: usize) {
    tracing::info!(
        event = "round_completed",
        round = round,
        global_accuracy = global_accuracy,
        nodes_participated = nodes,
        total_samples = total_samples,
        "training round completed"
    );
}

/// Log a round request that was gated.
pub fn round_skipped(reason: &str, total_samples: usize) {
    tracing::info!(
        event = "round_skipped",
        reason = %reason,
        total_samples = total_samples,
        "training round skipped"
    );
}

/// Log a snapshot write that failed after an in-memory mutation.
pub fn state_persist_failed(backend: &str, error: &str) {
    tracing::warn!(
        event = "state_persist_failed",
        backend = %backend,
        error = %error,
        "state snapshot not persisted; in-memory state kept"
    );
}

/// Log a coordinator reset.
pub fn state_reset(nodes: usize) {
    tracing::info!(event = "state_reset", nodes = nodes, "coordinator state reset");
}
