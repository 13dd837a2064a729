//! Key-value query operations
//!
//! Low-level access to the store table. Higher layers serialize their
//! state to a single blob per key.

use crate::error::Result;
use rusqlite::{Connection, params};

/// Get the stored value for a key, if any
pub fn get_value(conn: &Connection, key: &str) -> Result<Option<String>> {
    let result = conn.query_row(
        "SELECT value FROM passcore_store WHERE key = ?",
        params![key],
        |row| row.get(0),
    );
    Ok(result.ok())
}

/// Set the value for a key, replacing any previous value
pub fn set_value(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO passcore_store (key, value) VALUES (?, ?)",
        params![key, value],
    )?;
    Ok(())
}
