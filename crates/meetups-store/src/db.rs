//! Database connection management
//!
//! `PersistenceUnit` is the process-wide handle on the store: it is opened
//! once from a `StoreConfig`, handed to the seeder by `&mut`, and released
//! with `close` (or on drop).

use crate::config::{StoreConfig, StoreLocation};
use crate::errors::{from_rusqlite, io_error, Result};
use crate::migrations::apply_migrations;
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection
///
/// Foreign keys are off by default in SQLite and must be enabled per
/// connection, outside any transaction.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(from_rusqlite)
}

/// Switch a file-backed connection to WAL journaling
fn enable_wal(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA journal_mode = WAL;")
        .map_err(from_rusqlite)
}

/// An open, migrated connection to the meetups store
#[derive(Debug)]
pub struct PersistenceUnit {
    name: String,
    conn: Connection,
}

impl PersistenceUnit {
    /// Open the store described by `config` and bring its schema up to date
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let mut conn = match &config.location {
            StoreLocation::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| io_error("create_store_dir", e))?;
                }
                let conn = open(path)?;
                enable_wal(&conn)?;
                conn
            }
            StoreLocation::InMemory => open_in_memory()?,
        };

        configure(&conn)?;
        apply_migrations(&mut conn)?;

        tracing::debug!(
            unit_name = %config.unit_name,
            location = ?config.location,
            "persistence unit opened"
        );

        Ok(Self {
            name: config.unit_name.clone(),
            conn,
        })
    }

    /// Shorthand for a migrated in-memory unit
    pub fn open_in_memory() -> Result<Self> {
        Self::open(&StoreConfig::in_memory())
    }

    /// Logical name of this unit
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Mutable access, needed to open transactions
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Close the underlying connection, surfacing any error SQLite reports
    ///
    /// Dropping the unit also closes the connection but swallows the error.
    pub fn close(self) -> Result<()> {
        let name = self.name;
        self.conn.close().map_err(|(_, e)| from_rusqlite(e))?;
        tracing::debug!(unit_name = %name, "persistence unit closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory_enables_foreign_keys() {
        let unit = PersistenceUnit::open_in_memory().unwrap();
        let enabled: i64 = unit
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_open_reports_unit_name() {
        let unit =
            PersistenceUnit::open(&StoreConfig::in_memory().with_unit_name("scratch")).unwrap();
        assert_eq!(unit.name(), "scratch");
        unit.close().unwrap();
    }
}
