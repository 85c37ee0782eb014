use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::NodeId;

/// A node's contribution to one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantResult {
    pub node_id: NodeId,
    pub name: String,
    pub accuracy: f64,
    pub samples: usize,
}

/// One completed aggregation round, appended to history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u64,
    pub timestamp: DateTime<Utc>,
    pub global_accuracy: f64,
    pub nodes_participated: usize,
    pub total_samples: usize,
    pub new_claims_loaded: usize,
    pub participants: Vec<ParticipantResult>,
}

/// Result of a `train_round` call, successful or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub success: bool,
    pub message: String,
    /// Round counter after the call.
    pub round: u64,
    pub new_claims_loaded: usize,
    pub total_samples: usize,
    pub global_accuracy: f64,
    pub nodes_participated: usize,
    pub participants: Vec<ParticipantResult>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Per-node view in a status report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSummary {
    pub node_id: NodeId,
    pub name: String,
    pub samples: usize,
    pub accuracy: f64,
}

/// Coordinator status report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FederationStatus {
    pub rounds_completed: u64,
    pub global_accuracy: f64,
    pub total_nodes: usize,
    pub active_nodes: usize,
    pub total_training_samples: usize,
    pub processed_claims_count: usize,
    pub new_samples_available: usize,
    pub can_train: bool,
    pub status_message: String,
    pub nodes: Vec<NodeSummary>,
    /// Most recent rounds, oldest first.
    pub training_history: Vec<RoundRecord>,
}

/// Full round history view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingHistory {
    pub training_history: Vec<RoundRecord>,
    pub total_rounds: u64,
    pub current_accuracy: f64,
}
