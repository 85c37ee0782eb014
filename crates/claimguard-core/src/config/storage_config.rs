use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Where coordinator snapshots are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Single JSON file, replaced atomically on every write.
    #[default]
    Json,
    /// Single-row SQLite table.
    Sqlite,
    /// Process memory only; lost on restart.
    Memory,
}

impl StorageBackend {
    pub fn is_file_backed(self) -> bool {
        !matches!(self, Self::Memory)
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Sqlite => "sqlite",
            Self::Memory => "memory",
        };
        f.write_str(name)
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown storage backend: {other}")),
        }
    }
}

/// State-store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Snapshot location for file-backed backends.
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: defaults::DEFAULT_STATE_PATH.to_string(),
        }
    }
}
