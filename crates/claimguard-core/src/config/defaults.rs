// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_MAX_ATTACHMENTS: usize = 3;
pub const DEFAULT_MODEL_VERSION: &str = "2.0.0-narrative";

// --- Narrative service ---
pub const DEFAULT_NARRATIVE_ENABLED: bool = true;
pub const DEFAULT_NARRATIVE_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_NARRATIVE_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_NARRATIVE_TIMEOUT_SECS: u64 = 30;

// --- Federation ---
pub const DEFAULT_HISTORY_LIMIT: usize = 10;
pub const DEFAULT_NODE_ROSTER: [(u32, &str); 5] = [
    (1, "Hospital Network A"),
    (2, "Hospital Network B"),
    (3, "Insurance Company X"),
    (4, "Insurance Company Y"),
    (5, "Medical Clinic Chain"),
];

// --- Storage ---
pub const DEFAULT_STATE_PATH: &str = "fl_state.json";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
