use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::info;

use crate::config;
use crate::error::ClinicError;
use crate::schema::RecordType;

/// The single owned connection to the clinic store. Handlers borrow it
/// explicitly; nothing in the crate keeps a global handle.
pub struct Gateway {
    pub(super) conn: Connection,
}

impl Gateway {
    /// Open (or create) the store at the fixed location under the user's home
    /// and make sure every table exists. Safe to call on every startup.
    pub fn initialize() -> Result<Self> {
        let db_path = config::db_path()?;

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent).context("failed to create data directory")?;
        }

        let gateway = Self::open(&db_path).context("failed to open SQLite database")?;
        info!(path = %db_path.display(), "clinic store ready");
        Ok(gateway)
    }

    /// Open the store at an explicit path, creating any missing tables.
    pub fn open(path: &Path) -> Result<Self, ClinicError> {
        Self::prepare(Connection::open(path)?)
    }

    /// In-memory store with the full schema, used by tests.
    pub fn open_in_memory() -> Result<Self, ClinicError> {
        Self::prepare(Connection::open_in_memory()?)
    }

    /// Turn on foreign-key enforcement and run the idempotent DDL. Each
    /// statement runs in autocommit mode, so nothing needs an explicit commit.
    fn prepare(conn: Connection) -> Result<Self, ClinicError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        for record_type in RecordType::ALL {
            conn.execute(record_type.spec().create_sql, [])
                .map_err(|err| {
                    ClinicError::Storage(format!(
                        "failed to create {} table: {err}",
                        record_type.table_name()
                    ))
                })?;
        }

        Ok(Self { conn })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_all_tables_with_foreign_keys_on() {
        let gateway = Gateway::open_in_memory().unwrap();

        let enabled: i64 = gateway
            .conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);

        for record_type in RecordType::ALL {
            let count: i64 = gateway
                .conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [record_type.table_name()],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "{} table missing", record_type.table_name());
        }
    }
}
