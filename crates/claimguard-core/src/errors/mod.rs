//! Error handling for ClaimGuard.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod claimguard_error;
pub mod config_error;
pub mod federation_error;
pub mod narrative_error;
pub mod storage_error;

pub use claimguard_error::{ClaimGuardError, ClaimGuardResult};
pub use config_error::ConfigError;
pub use federation_error::FederationError;
pub use narrative_error::NarrativeError;
pub use storage_error::StorageError;
