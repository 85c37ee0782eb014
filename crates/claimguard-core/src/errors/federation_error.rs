use crate::models::NodeId;

/// Errors raised while constructing the federated node roster.
#[derive(Debug, thiserror::Error)]
pub enum FederationError {
    #[error("node roster is empty")]
    EmptyRoster,

    #[error("duplicate node id in roster: {0}")]
    DuplicateNode(NodeId),
}
