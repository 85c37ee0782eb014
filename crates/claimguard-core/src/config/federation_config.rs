use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::NodeId;

/// One participant in the fixed node roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: NodeId,
    pub name: String,
}

impl NodeSpec {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Federated aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FederationConfig {
    /// RNG seed for node assignment and training noise. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Number of history entries included in a status report.
    pub history_limit: usize,
    /// Fixed roster, created once at startup.
    pub nodes: Vec<NodeSpec>,
}

impl Default for FederationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_limit: defaults::DEFAULT_HISTORY_LIMIT,
            nodes: defaults::DEFAULT_NODE_ROSTER
                .iter()
                .map(|(id, name)| NodeSpec::new(*id, *name))
                .collect(),
        }
    }
}
