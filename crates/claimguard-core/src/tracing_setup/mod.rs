//! Tracing setup: subscriber initialization and structured event helpers.

pub mod events;

use tracing_subscriber::EnvFilter;

use crate::config::ObservabilityConfig;

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "CLAIMGUARD_LOG";

/// Initialize the global tracing subscriber.
///
/// `CLAIMGUARD_LOG` wins over `config.log_level`. Calling this more than once
/// is a no-op.
pub fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.json {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Initialize tracing with a custom filter string (for tests or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_test_writer()
        .try_init();
}
