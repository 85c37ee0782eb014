//! Snapshot in SQLite: one state row plus the processed claim id set.
//!
//! Each save replaces both inside a single transaction.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use claimguard_core::errors::StorageError;
use claimguard_core::models::{ClaimId, CoordinatorSnapshot};
use claimguard_core::traits::IStateStore;
use rusqlite::{params, Connection, OptionalExtension};

use crate::pragmas::apply_pragmas;
use crate::to_sqlite_err;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS coordinator_state (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    training_rounds INTEGER NOT NULL,
    global_model_accuracy REAL NOT NULL,
    last_trained_sample_total INTEGER NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE TABLE IF NOT EXISTS processed_claims (
    claim_id INTEGER PRIMARY KEY
);
";

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(to_sqlite_err)?;
        apply_pragmas(&conn)?;
        Self::initialize(conn)
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(to_sqlite_err)?;
        Self::initialize(conn)
    }

    fn initialize(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(SCHEMA).map_err(to_sqlite_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::SqliteError {
            message: "connection lock poisoned".to_string(),
        })
    }
}

fn to_i64(value: u64, what: &str) -> Result<i64, StorageError> {
    i64::try_from(value).map_err(|_| StorageError::Serialization {
        reason: format!("{what} {value} exceeds the SQLite integer range"),
    })
}

fn to_u64(value: i64, what: &str) -> Result<u64, StorageError> {
    u64::try_from(value).map_err(|_| StorageError::CorruptSnapshot {
        details: format!("negative {what}: {value}"),
    })
}

impl IStateStore for SqliteStore {
    fn load(&self) -> Result<Option<CoordinatorSnapshot>, StorageError> {
        let conn = self.conn()?;
        let row = conn
            .query_row(
                "SELECT training_rounds, global_model_accuracy, last_trained_sample_total
                 FROM coordinator_state WHERE id = 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, f64>(1)?,
                        row.get::<_, i64>(2)?,
                    ))
                },
            )
            .optional()
            .map_err(to_sqlite_err)?;

        let Some((rounds, accuracy, last_total)) = row else {
            return Ok(None);
        };

        let mut stmt = conn
            .prepare("SELECT claim_id FROM processed_claims")
            .map_err(to_sqlite_err)?;
        let ids = stmt
            .query_map([], |row| row.get::<_, i64>(0))
            .map_err(to_sqlite_err)?;
        let mut processed_claims = std::collections::BTreeSet::new();
        for id in ids {
            let id: ClaimId = to_u64(id.map_err(to_sqlite_err)?, "claim id")?;
            processed_claims.insert(id);
        }

        Ok(Some(CoordinatorSnapshot {
            processed_claims,
            training_rounds: to_u64(rounds, "round counter")?,
            global_model_accuracy: accuracy,
            last_trained_sample_total: to_u64(last_total, "sample total")? as usize,
        }))
    }

    fn save(&self, snapshot: &CoordinatorSnapshot) -> Result<(), StorageError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction().map_err(to_sqlite_err)?;

        tx.execute(
            "INSERT INTO coordinator_state
                (id, training_rounds, global_model_accuracy, last_trained_sample_total, updated_at)
             VALUES (1, ?1, ?2, ?3, datetime('now'))
             ON CONFLICT(id) DO UPDATE SET
                training_rounds = excluded.training_rounds,
                global_model_accuracy = excluded.global_model_accuracy,
                last_trained_sample_total = excluded.last_trained_sample_total,
                updated_at = excluded.updated_at",
            params![
                to_i64(snapshot.training_rounds, "round counter")?,
                snapshot.global_model_accuracy,
                to_i64(snapshot.last_trained_sample_total as u64, "sample total")?,
            ],
        )
        .map_err(to_sqlite_err)?;

        tx.execute("DELETE FROM processed_claims", [])
            .map_err(to_sqlite_err)?;
        {
            let mut insert = tx
                .prepare("INSERT INTO processed_claims (claim_id) VALUES (?1)")
                .map_err(to_sqlite_err)?;
            for id in &snapshot.processed_claims {
                insert
                    .execute(params![to_i64(*id, "claim id")?])
                    .map_err(to_sqlite_err)?;
            }
        }

        tx.commit().map_err(to_sqlite_err)
    }

    fn name(&self) -> &str {
        "sqlite"
    }
}
