//! SQLite connection management for the defaults store.

use rusqlite::Connection;
use std::fs;
use std::path::Path;

use super::migrations;

/// Owns the `rusqlite::Connection` backing the key-value defaults.
///
/// Opening always runs migrations, so callers can rely on the `defaults`
/// table being present.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) the database file at `path`, creating missing parent
    /// directories first.
    ///
    /// `":memory:"` is accepted and behaves like [`Database::open_in_memory`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    rusqlite::Error::InvalidPath(parent.join(format!("({})", e)))
                })?;
            }
        }
        Self::with_connection(Connection::open(path)?)
    }

    /// Opens a throwaway in-memory database.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, rusqlite::Error> {
        migrations::run_all(&conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
