//! Top-level ClaimGuard configuration with layered resolution.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    FederationConfig, NarrativeConfig, ObservabilityConfig, ScoringConfig, StorageConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CLAIMGUARD_*`)
/// 2. Config file passed to [`ClaimGuardConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClaimGuardConfig {
    pub scoring: ScoringConfig,
    pub narrative: NarrativeConfig,
    pub federation: FederationConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl ClaimGuardConfig {
    /// Load configuration: defaults, then `path` (if given), then environment.
    /// The result is validated before it is returned.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        Self::validate(&config)?;
        Ok(config)
    }

    /// Parse a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ClaimGuardConfig) -> Result<(), ConfigError> {
        if config.scoring.max_attachments == 0 {
            return Err(invalid("scoring.max_attachments", "must be greater than 0"));
        }
        if config.narrative.timeout_secs == 0 {
            return Err(invalid("narrative.timeout_secs", "must be greater than 0"));
        }
        if config.federation.nodes.is_empty() {
            return Err(invalid("federation.nodes", "roster must not be empty"));
        }
        let mut seen = HashSet::new();
        for node in &config.federation.nodes {
            if !seen.insert(node.id) {
                return Err(invalid(
                    "federation.nodes",
                    &format!("duplicate node id {}", node.id),
                ));
            }
        }
        if config.federation.history_limit == 0 {
            return Err(invalid("federation.history_limit", "must be greater than 0"));
        }
        if config.storage.backend.is_file_backed() && config.storage.path.trim().is_empty() {
            return Err(invalid(
                "storage.path",
                "required for file-backed storage backends",
            ));
        }
        Ok(())
    }

    /// Apply `CLAIMGUARD_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    /// Values that fail to parse are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("CLAIMGUARD_STORAGE_BACKEND") {
            if let Ok(backend) = val.parse() {
                self.storage.backend = backend;
            }
        }
        if let Some(val) = lookup("CLAIMGUARD_STORAGE_PATH") {
            self.storage.path = val;
        }
        if let Some(val) = lookup("CLAIMGUARD_NARRATIVE_API_KEY") {
            self.narrative.api_key = Some(val);
        }
        if let Some(val) = lookup("CLAIMGUARD_NARRATIVE_MODEL") {
            self.narrative.model = val;
        }
        if let Some(val) = lookup("CLAIMGUARD_NARRATIVE_ENDPOINT") {
            self.narrative.endpoint = val;
        }
        if let Some(val) = lookup("CLAIMGUARD_NARRATIVE_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                self.narrative.enabled = v;
            }
        }
        if let Some(val) = lookup("CLAIMGUARD_FEDERATION_SEED") {
            if let Ok(v) = val.parse::<u64>() {
                self.federation.seed = Some(v);
            }
        }
        if let Some(val) = lookup("CLAIMGUARD_LOG_LEVEL") {
            self.observability.log_level = val;
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
