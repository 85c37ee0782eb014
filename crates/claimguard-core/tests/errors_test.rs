use claimguard_core::errors::*;

#[test]
fn narrative_unavailable_carries_provider() {
    let err = NarrativeError::ProviderUnavailable {
        provider: "gemini-2.5-flash".into(),
    };
    assert!(err.to_string().contains("gemini-2.5-flash"));
}

#[test]
fn storage_io_carries_path() {
    let err = StorageError::Io {
        path: "/var/lib/fl_state.json".into(),
        reason: "permission denied".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("/var/lib/fl_state.json"));
    assert!(msg.contains("permission denied"));
}

#[test]
fn duplicate_node_carries_id() {
    assert!(FederationError::DuplicateNode(4).to_string().contains('4'));
}

// --- From impls ---

#[test]
fn storage_error_converts() {
    let err: ClaimGuardError = StorageError::SqliteError {
        message: "disk full".into(),
    }
    .into();
    assert!(matches!(err, ClaimGuardError::StorageError(_)));
}

#[test]
fn narrative_error_converts() {
    let err: ClaimGuardError = NarrativeError::EmptyResponse {
        provider: "mock".into(),
    }
    .into();
    assert!(matches!(err, ClaimGuardError::NarrativeError(_)));
}

#[test]
fn config_error_converts() {
    let err: ClaimGuardError = ConfigError::ValidationFailed {
        field: "storage.path".into(),
        message: "empty".into(),
    }
    .into();
    assert!(matches!(err, ClaimGuardError::ConfigError(_)));
    assert!(err.to_string().contains("storage.path"));
}

#[test]
fn federation_error_converts() {
    let err: ClaimGuardError = FederationError::EmptyRoster.into();
    assert!(matches!(err, ClaimGuardError::FederationError(_)));
}
