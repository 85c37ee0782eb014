use std::collections::HashMap;
use std::io::Write;

use claimguard_core::config::{ClaimGuardConfig, NodeSpec, StorageBackend};
use claimguard_core::errors::ConfigError;

#[test]
fn defaults_are_valid() {
    let config = ClaimGuardConfig::default();
    ClaimGuardConfig::validate(&config).unwrap();
    assert_eq!(config.scoring.max_attachments, 3);
    assert_eq!(config.federation.history_limit, 10);
    assert_eq!(config.storage.backend, StorageBackend::Json);
    assert!(!config.narrative.is_usable(), "no api key by default");
}

#[test]
fn default_roster_has_five_named_nodes() {
    let config = ClaimGuardConfig::default();
    let names: Vec<_> = config
        .federation
        .nodes
        .iter()
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Hospital Network A",
            "Hospital Network B",
            "Insurance Company X",
            "Insurance Company Y",
            "Medical Clinic Chain",
        ]
    );
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = ClaimGuardConfig::from_toml(
        r#"
        [storage]
        backend = "sqlite"
        path = "/tmp/state.db"

        [federation]
        seed = 7
        "#,
    )
    .unwrap();
    assert_eq!(config.storage.backend, StorageBackend::Sqlite);
    assert_eq!(config.storage.path, "/tmp/state.db");
    assert_eq!(config.federation.seed, Some(7));
    assert_eq!(config.federation.nodes.len(), 5);
    assert_eq!(config.narrative.model, "gemini-2.5-flash");
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = ClaimGuardConfig::from_toml("[storage\nbackend = 1").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn duplicate_node_ids_rejected() {
    let mut config = ClaimGuardConfig::default();
    config.federation.nodes = vec![NodeSpec::new(1, "a"), NodeSpec::new(1, "b")];
    let err = ClaimGuardConfig::validate(&config).unwrap_err();
    assert!(err.to_string().contains("duplicate node id 1"));
}

#[test]
fn empty_roster_rejected() {
    let mut config = ClaimGuardConfig::default();
    config.federation.nodes.clear();
    assert!(matches!(
        ClaimGuardConfig::validate(&config),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn zero_attachments_rejected() {
    let mut config = ClaimGuardConfig::default();
    config.scoring.max_attachments = 0;
    assert!(ClaimGuardConfig::validate(&config).is_err());
}

#[test]
fn memory_backend_does_not_need_path() {
    let mut config = ClaimGuardConfig::default();
    config.storage.backend = StorageBackend::Memory;
    config.storage.path = String::new();
    ClaimGuardConfig::validate(&config).unwrap();
}

#[test]
fn overrides_apply_and_bad_values_are_ignored() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("CLAIMGUARD_STORAGE_BACKEND", "memory"),
        ("CLAIMGUARD_NARRATIVE_API_KEY", "secret"),
        ("CLAIMGUARD_FEDERATION_SEED", "not-a-number"),
        ("CLAIMGUARD_NARRATIVE_ENABLED", "true"),
    ]);
    let mut config = ClaimGuardConfig::default();
    config.apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()));
    assert_eq!(config.storage.backend, StorageBackend::Memory);
    assert_eq!(config.narrative.api_key.as_deref(), Some("secret"));
    assert_eq!(config.federation.seed, None);
    assert!(config.narrative.is_usable());
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[federation]\nhistory_limit = 3").unwrap();
    let config = ClaimGuardConfig::from_file(file.path()).unwrap();
    assert_eq!(config.federation.history_limit, 3);
}

#[test]
fn missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = ClaimGuardConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn toml_round_trip_preserves_roster() {
    let config = ClaimGuardConfig::default();
    let text = config.to_toml().unwrap();
    let back = ClaimGuardConfig::from_toml(&text).unwrap();
    assert_eq!(back.federation.nodes, config.federation.nodes);
}
