//! Configuration for every ClaimGuard subsystem.
//!
//! # Examples
//!
//! ```
//! use claimguard_core::config::ClaimGuardConfig;
//!
//! let config = ClaimGuardConfig::default();
//! assert_eq!(config.scoring.max_attachments, 3);
//! assert_eq!(config.federation.nodes.len(), 5);
//! ```

pub mod claimguard_config;
pub mod defaults;
pub mod federation_config;
pub mod narrative_config;
pub mod observability_config;
pub mod scoring_config;
pub mod storage_config;

pub use claimguard_config::ClaimGuardConfig;
pub use federation_config::{FederationConfig, NodeSpec};
pub use narrative_config::NarrativeConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;
pub use storage_config::{StorageBackend, StorageConfig};
