//! Database schema definitions

/// Key-value store table
pub const CREATE_STORE_TABLE: &str = "
CREATE TABLE IF NOT EXISTS passcore_store (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
)";

/// All table creation statements
pub const CREATE_ALL_TABLES: &[&str] = &[CREATE_STORE_TABLE];
