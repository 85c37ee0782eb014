/// State-store errors for snapshot reads and writes.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("snapshot serialization failed: {reason}")]
    Serialization { reason: String },

    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("snapshot corrupted: {details}")]
    CorruptSnapshot { details: String },
}
