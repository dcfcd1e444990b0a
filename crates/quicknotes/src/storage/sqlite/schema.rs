//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// Creates the notes table when it is missing.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row
/// again.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

pub const SELECT_NOTES: &str = r#"
SELECT id, title, content, created_at, updated_at
FROM notes
ORDER BY updated_at DESC, id DESC
"#;

pub const SELECT_NOTE_BY_ID: &str = r#"
SELECT id, title, content, created_at, updated_at
FROM notes
WHERE id = ?1
"#;

pub const INSERT_NOTE: &str = r#"
INSERT INTO notes (title, content, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const UPDATE_NOTE: &str = r#"
UPDATE notes
SET title = ?2, content = ?3, updated_at = ?4
WHERE id = ?1
"#;

pub const DELETE_NOTE: &str = r#"
DELETE FROM notes
WHERE id = ?1
"#;
