//! Key-value defaults store.
//!
//! A small persistent map from string keys to JSON values, backed by the
//! `defaults` table. Absent keys read as `None`.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, OptionalExtension};
use serde_json::Value;

use crate::database::connection::Database;
use crate::types::errors::StoreError;

/// Trait defining the defaults store interface.
pub trait DefaultsStoreTrait {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn set(&self, key: &str, value: &Value) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
    fn contains(&self, key: &str) -> Result<bool, StoreError>;

    /// Reads a list of strings. A missing key yields `None`; a value of any
    /// other shape is a [`StoreError::TypeMismatch`].
    fn get_string_array(&self, key: &str) -> Result<Option<Vec<String>>, StoreError> {
        match self.get(key)? {
            None => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|_| StoreError::TypeMismatch(key.to_string())),
        }
    }

    fn set_string_array(&self, key: &str, items: &[String]) -> Result<(), StoreError> {
        let value = serde_json::to_value(items)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        self.set(key, &value)
    }
}

/// SQLite-backed defaults store. Cheap to clone; clones share the database.
#[derive(Clone)]
pub struct DefaultsStore {
    db: Arc<Database>,
}

impl DefaultsStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl DefaultsStoreTrait for DefaultsStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let raw: Option<String> = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM defaults WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        match raw {
            None => Ok(None),
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(|e| StoreError::SerializationError(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let text = serde_json::to_string(value)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        self.db
            .connection()
            .execute(
                "INSERT INTO defaults (key, value, updated_at) VALUES (?1, ?2, ?3) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, text, Self::now()],
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.db
            .connection()
            .execute("DELETE FROM defaults WHERE key = ?1", params![key])
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        self.db
            .connection()
            .query_row(
                "SELECT COUNT(*) > 0 FROM defaults WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .map_err(|e| StoreError::DatabaseError(e.to_string()))
    }
}
