//! SQLite-backed key-value storage
//!
//! Stands in for the scoped key-value store the history is persisted
//! to. Serialized blobs are stored whole under fixed keys.

pub mod connection;
pub mod queries;
pub mod schema;

pub use connection::Database;
