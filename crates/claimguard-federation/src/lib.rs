//! # claimguard-federation
//!
//! Simulated federated aggregation over finalized claims.
//!
//! Finalized claims are projected into feature vectors, assigned to one node
//! each, and "trained" locally; a round combines node accuracies into a
//! sample-weighted global accuracy. Coordinator state is snapshotted through
//! an [`IStateStore`](claimguard_core::traits::IStateStore) after every mutation.

pub mod coordinator;
pub mod features;
pub mod node;

pub use coordinator::Coordinator;
pub use features::FeatureProjector;
pub use node::Node;
