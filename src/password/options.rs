//! Password generation options

use crate::error::{PassError, Result};
use crate::{PASSWORD_DEFAULT_LENGTH, PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH, QUANTITY_MAX};
use serde::{Deserialize, Serialize};

/// Options for password generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordOptions {
    /// Include uppercase letters (A-Z)
    pub uppercase: bool,
    /// Include lowercase letters (a-z)
    pub lowercase: bool,
    /// Include digits (0-9)
    pub digits: bool,
    /// Include symbols (!@#$%...)
    pub symbols: bool,
    /// Exclude visually similar characters (i, l, 1, L, o, 0, O)
    pub exclude_similar: bool,
    /// Password length
    pub length: usize,
    /// Number of passwords to generate
    pub quantity: usize,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_similar: false,
            length: PASSWORD_DEFAULT_LENGTH,
            quantity: 1,
        }
    }
}

impl PasswordOptions {
    /// Check whether at least one character class is enabled
    pub fn has_any_class(&self) -> bool {
        self.uppercase || self.lowercase || self.digits || self.symbols
    }

    /// Validate options before generation.
    ///
    /// Rejects option sets with no enabled character class, a length
    /// outside [`PASSWORD_MIN_LENGTH`], [`PASSWORD_MAX_LENGTH`], or a
    /// quantity outside 1..=[`QUANTITY_MAX`].
    pub fn validate(&self) -> Result<()> {
        if !self.has_any_class() {
            return Err(PassError::InvalidOptions(
                "at least one character class must be selected".to_string(),
            ));
        }

        if self.length < PASSWORD_MIN_LENGTH || self.length > PASSWORD_MAX_LENGTH {
            return Err(PassError::InvalidOptions(format!(
                "password length must be between {} and {}",
                PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
            )));
        }

        if self.quantity < 1 || self.quantity > QUANTITY_MAX {
            return Err(PassError::InvalidOptions(format!(
                "quantity must be between 1 and {}",
                QUANTITY_MAX
            )));
        }

        Ok(())
    }
}
