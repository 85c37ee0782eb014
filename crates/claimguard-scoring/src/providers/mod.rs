//! Narrative-analysis providers.
//!
//! - [`GeminiProvider`]: Gemini-compatible `generateContent` HTTP API.
//!
//! With no provider configured the engine goes straight to the fallback scorer.

pub mod gemini_provider;

pub use gemini_provider::GeminiProvider;

use claimguard_core::config::NarrativeConfig;
use claimguard_core::traits::INarrativeAnalyzer;
use tracing::info;

/// Build the configured provider, or `None` when narrative analysis is
/// disabled or has no credentials.
pub fn from_config(config: &NarrativeConfig) -> Option<Box<dyn INarrativeAnalyzer>> {
    match GeminiProvider::from_config(config) {
        Some(provider) => {
            info!(model = %config.model, "narrative provider configured");
            Some(Box::new(provider))
        }
        None => {
            info!(
                enabled = config.enabled,
                "narrative provider not configured, using fallback scoring only"
            );
            None
        }
    }
}
