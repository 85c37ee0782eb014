//! # claimguard-core
//!
//! Foundation crate for the ClaimGuard claim risk pipeline.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod random;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::ClaimGuardConfig;
pub use errors::{ClaimGuardError, ClaimGuardResult};
pub use models::{
    ClaimId, ClaimInput, ClaimStatus, ClaimType, FeatureVector, FinalizedClaim, FraudAssessment,
    ProofFile, RiskLevel,
};
pub use random::SeededRandom;
