//! Main Generator API

use crate::error::Result;
use crate::history::{HistoryEntry, HistoryStore};
use crate::password::{PasswordOptions, build_pool, generate_batch};
use crate::strength::{self, StrengthAnalysis, StrengthResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Outcome of a generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// The generated passwords, `quantity` of them
    pub passwords: Vec<String>,
    /// Strength of the first password
    pub strength: StrengthResult,
}

/// Main generator interface
pub struct Generator {
    /// Persisted history of single-password generations
    history: HistoryStore,
}

impl Generator {
    /// Open a generator with its history stored in the given folder
    pub fn open(folder: &Path) -> Result<Self> {
        Ok(Self {
            history: HistoryStore::open(folder)?,
        })
    }

    /// Generate passwords for the given options.
    ///
    /// Validates the options, builds the character pool, draws the
    /// batch and scores the first password. When exactly one password
    /// was requested it is recorded into the history.
    pub fn generate(&mut self, options: &PasswordOptions) -> Result<GenerationResult> {
        options.validate()?;

        let pool = build_pool(options)?;
        let passwords = generate_batch(&pool, options.length, options.quantity)?;
        let strength = strength::score(&passwords[0]);

        if options.quantity == 1 {
            self.history.record(&passwords[0])?;
        }

        Ok(GenerationResult { passwords, strength })
    }

    /// Analyze an arbitrary password without touching the history
    pub fn analyze(&self, password: &str) -> StrengthAnalysis {
        strength::analyze(password)
    }

    /// Recorded history, most recent first
    pub fn history(&self) -> &[HistoryEntry] {
        self.history.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PassError;
    use crate::strength::StrengthLevel;
    use tempfile::TempDir;

    fn open_generator() -> (Generator, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let generator = Generator::open(temp_dir.path()).unwrap();
        (generator, temp_dir)
    }

    #[test]
    fn test_generate_single_records_history() {
        let (mut generator, _temp) = open_generator();

        let result = generator.generate(&PasswordOptions::default()).unwrap();
        assert_eq!(result.passwords.len(), 1);
        assert_eq!(result.passwords[0].chars().count(), 12);

        assert_eq!(generator.history().len(), 1);
        assert_eq!(generator.history()[0].password, result.passwords[0]);
    }

    #[test]
    fn test_generate_batch_skips_history() {
        let (mut generator, _temp) = open_generator();

        let options = PasswordOptions {
            quantity: 5,
            ..Default::default()
        };
        let result = generator.generate(&options).unwrap();
        assert_eq!(result.passwords.len(), 5);
        assert!(generator.history().is_empty());
    }

    #[test]
    fn test_generate_rejects_invalid_options() {
        let (mut generator, _temp) = open_generator();

        let options = PasswordOptions {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            ..Default::default()
        };
        match generator.generate(&options) {
            Err(PassError::InvalidOptions(_)) => {}
            other => panic!("Expected InvalidOptions, got {:?}", other),
        }
        assert!(generator.history().is_empty());
    }

    #[test]
    fn test_generate_scores_first_password() {
        let (mut generator, _temp) = open_generator();

        // A 12-char digits-only password scores at most 36 - 20 = 16
        let options = PasswordOptions {
            uppercase: false,
            lowercase: false,
            digits: true,
            symbols: false,
            ..Default::default()
        };
        let result = generator.generate(&options).unwrap();
        assert_eq!(result.strength.level, StrengthLevel::Weak);
        assert!(result.strength.score <= 16);
    }

    #[test]
    fn test_analyze_does_not_touch_history() {
        let (generator, _temp) = open_generator();
        let analysis = generator.analyze("Ab3!Xy9#");
        assert_eq!(analysis.score, 69);
        assert!(generator.history().is_empty());
    }
}
