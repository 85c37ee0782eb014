use super::{ConfigError, FederationError, NarrativeError, StorageError};

/// Top-level error for every fallible ClaimGuard operation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ClaimGuardError {
    #[error("narrative error: {0}")]
    NarrativeError(#[from] NarrativeError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("federation error: {0}")]
    FederationError(#[from] FederationError),

    #[error("invalid claim: {reason}")]
    InvalidClaim { reason: String },

    #[error("lock poisoned: {component}")]
    LockPoisoned { component: String },
}

pub type ClaimGuardResult<T> = Result<T, ClaimGuardError>;
