//! PRAGMA configuration applied to the snapshot database connection.

use claimguard_core::errors::StorageError;
use rusqlite::Connection;

use crate::to_sqlite_err;

/// WAL journaling, NORMAL sync, 5s busy timeout.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        ",
    )
    .map_err(to_sqlite_err)
}
