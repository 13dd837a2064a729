//! Bounded, persisted password history
//!
//! An ordered, most-recent-first log of previously generated single
//! passwords, capped at [`HISTORY_CAPACITY`] entries. The whole
//! sequence is serialized to JSON and persisted under one fixed key on
//! every mutation; malformed or absent stored data loads as an empty
//! history.

use crate::database::{Database, queries};
use crate::error::Result;
use crate::{DATABASE_FILENAME, HISTORY_CAPACITY, HISTORY_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single recorded password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The generated password
    pub password: String,
    /// When it was generated
    pub generated_at: DateTime<Utc>,
}

/// Bounded history of generated passwords
pub struct HistoryStore {
    /// Backing database
    db: Database,
    /// In-memory sequence, most recent first
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Open the history store in the given folder.
    ///
    /// Creates the database file if it does not exist. Previously
    /// persisted entries are loaded once here; corrupt stored data is
    /// treated as an empty history, never as an error.
    pub fn open(folder: &Path) -> Result<Self> {
        std::fs::create_dir_all(folder)?;

        let db = Database::open(&folder.join(DATABASE_FILENAME))?;
        let entries = Self::load_entries(&db)?;

        Ok(Self { db, entries })
    }

    fn load_entries(db: &Database) -> Result<Vec<HistoryEntry>> {
        let Some(blob) = queries::get_value(db.connection()?, HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        // Malformed data is recovered as an empty history
        Ok(serde_json::from_str(&blob).unwrap_or_default())
    }

    /// Record a newly generated password.
    ///
    /// Inserts at the front with the current timestamp, evicts entries
    /// past the capacity, and persists the whole sequence.
    pub fn record(&mut self, password: &str) -> Result<()> {
        self.entries.insert(
            0,
            HistoryEntry {
                password: password.to_string(),
                generated_at: Utc::now(),
            },
        );
        self.entries.truncate(HISTORY_CAPACITY);

        let blob = serde_json::to_string(&self.entries)?;
        queries::set_value(self.db.connection()?, HISTORY_KEY, &blob)
    }

    /// Current sequence, most recent first
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the history is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
