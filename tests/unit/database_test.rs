//! Unit tests for the Database connection and schema migrations.
//!
//! Verifies that opening a database (file-backed or in-memory) always leaves
//! the `defaults` table in place and that migrations are idempotent.

use fooscreen::database::connection::Database;
use fooscreen::database::migrations::{self, CURRENT_SCHEMA_VERSION};

fn table_names(db: &Database) -> Vec<String> {
    let conn = db.connection();
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .filter_map(|r| r.ok())
        .collect()
}

#[test]
fn test_in_memory_database_has_schema() {
    let db = Database::open_in_memory().expect("Failed to open in-memory database");
    let tables = table_names(&db);
    assert!(tables.contains(&"defaults".to_string()), "tables: {:?}", tables);
    assert!(tables.contains(&"schema_version".to_string()));
    assert_eq!(migrations::get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_run_all_is_idempotent() {
    let db = Database::open_in_memory().unwrap();
    migrations::run_all(db.connection()).unwrap();
    migrations::run_all(db.connection()).unwrap();

    let versions: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(versions, CURRENT_SCHEMA_VERSION as i64);
}

#[test]
fn test_open_creates_missing_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("fooscreen.db");
    let db = Database::open(&path).expect("open should create parent directories");
    assert!(path.exists());
    assert!(table_names(&db).contains(&"defaults".to_string()));
}

#[test]
fn test_file_database_persists_between_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fooscreen.db");
    {
        let db = Database::open(&path).unwrap();
        db.connection()
            .execute(
                "INSERT INTO defaults (key, value, updated_at) VALUES ('k', '\"v\"', 0)",
                [],
            )
            .unwrap();
    }
    let db = Database::open(&path).unwrap();
    let value: String = db
        .connection()
        .query_row("SELECT value FROM defaults WHERE key = 'k'", [], |row| row.get(0))
        .unwrap();
    assert_eq!(value, "\"v\"");
}
