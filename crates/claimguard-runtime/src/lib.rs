//! # claimguard-runtime
//!
//! [`ClaimGuardRuntime`] is the one context object a host process builds at
//! startup. It owns the scoring engine and the coordinator, serializes every
//! mutation behind a lock, and flushes coordinator state on shutdown.

pub mod preparation;
pub mod runtime;

pub use runtime::ClaimGuardRuntime;
