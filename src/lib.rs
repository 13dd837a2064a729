//! # Passcore
//!
//! A password generator core library.
//!
//! ## Features
//!
//! - Character pools built from selectable classes (uppercase, lowercase,
//!   digits, symbols) with optional exclusion of look-alike characters
//! - Uniform random generation of single passwords or batches
//! - Heuristic strength scoring with level mapping and suggestions
//! - Bounded most-recent-first history persisted in SQLite
//!
//! ## Example
//!
//! ```no_run
//! use passcore::{Generator, PasswordOptions};
//! use std::path::Path;
//!
//! let mut generator = Generator::open(Path::new("/path/to/data")).unwrap();
//!
//! let result = generator.generate(&PasswordOptions::default()).unwrap();
//! println!("{} ({}/100)", result.passwords[0], result.strength.score);
//! ```

pub mod business;
pub mod database;
pub mod error;
pub mod history;
pub mod password;
pub mod strength;

// Re-export main types
pub use business::{GenerationResult, Generator};
pub use error::{PassError, Result};
pub use history::{HistoryEntry, HistoryStore};
pub use password::{PasswordOptions, build_pool, generate_batch, generate_one};
pub use strength::{StrengthAnalysis, StrengthLevel, StrengthResult, analyze, score};

/// Database filename
pub const DATABASE_FILENAME: &str = "history.dat";

/// Storage key for the persisted history sequence
pub const HISTORY_KEY: &str = "password_history";

/// Maximum number of history entries kept
pub const HISTORY_CAPACITY: usize = 10;

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Maximum password length
pub const PASSWORD_MAX_LENGTH: usize = 50;

/// Maximum number of passwords per batch
pub const QUANTITY_MAX: usize = 10;

/// Default password length
pub const PASSWORD_DEFAULT_LENGTH: usize = 12;
