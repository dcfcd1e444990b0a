//! Parser for the database connection file.
//!
//! The database workspace publishes a small text file describing where the
//! SQLite file lives. Two line shapes are recognized:
//!
//! ```text
//! # SQLite connection
//! File path: /srv/notes/database/notes.db
//! Connection string: sqlite:////srv/notes/database/notes.db
//! ```
//!
//! Parsing is pure; reading the file and checking the directory is left to
//! the caller.

use std::path::PathBuf;

const FILE_PATH_PREFIX: &str = "file path:";
const CONNECTION_STRING_PREFIX: &str = "connection string:";
const SQLITE_URL_PREFIX: &str = "sqlite:////";

/// Extracts the SQLite file path from connection file contents.
///
/// Lines are trimmed; blank lines and `#` comments are skipped. Prefixes are
/// matched case-insensitively. The first line that yields a path wins:
/// a `File path:` line with a non-empty value, or a `Connection string:`
/// line whose value is a `sqlite:////` URL (rewritten to an absolute path).
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use quicknotes_core::connection_file::parse_connection_file;
///
/// let contents = "Connection string: sqlite:////data/notes.db\n";
/// assert_eq!(parse_connection_file(contents), Some(PathBuf::from("/data/notes.db")));
/// ```
pub fn parse_connection_file(contents: &str) -> Option<PathBuf> {
    contents.lines().find_map(parse_line)
}

fn parse_line(raw: &str) -> Option<PathBuf> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    if let Some(value) = strip_prefix_ignore_case(line, FILE_PATH_PREFIX) {
        let value = value.trim();
        return (!value.is_empty()).then(|| PathBuf::from(value));
    }

    if let Some(value) = strip_prefix_ignore_case(line, CONNECTION_STRING_PREFIX) {
        return value
            .trim()
            .strip_prefix(SQLITE_URL_PREFIX)
            .map(|rest| PathBuf::from(format!("/{rest}")));
    }

    None
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &line[prefix.len()..])
}
