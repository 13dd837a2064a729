//! Character pool construction
//!
//! Builds the concrete alphabet to sample from, concatenating the fixed
//! alphabets of the enabled classes in a fixed order and optionally
//! stripping visually similar characters.

use super::options::PasswordOptions;
use crate::error::{PassError, Result};

/// Uppercase letter alphabet
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Lowercase letter alphabet
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Digit alphabet
pub const DIGIT_CHARS: &str = "0123456789";

/// Symbol alphabet
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Visually similar characters excluded on request
pub const SIMILAR_CHARS: &str = "il1Lo0O";

/// Build the character pool for the given options.
///
/// Classes are concatenated in a fixed order (uppercase, lowercase,
/// digits, symbols). When `exclude_similar` is set, every occurrence of
/// each similar character is removed from the pool.
///
/// Returns [`PassError::EmptyPool`] if the resulting pool has no
/// characters. Callers normally reject empty class sets up front via
/// [`PasswordOptions::validate`], but the builder guards independently.
pub fn build_pool(options: &PasswordOptions) -> Result<Vec<char>> {
    let mut pool = String::new();

    if options.uppercase {
        pool.push_str(UPPERCASE_CHARS);
    }
    if options.lowercase {
        pool.push_str(LOWERCASE_CHARS);
    }
    if options.digits {
        pool.push_str(DIGIT_CHARS);
    }
    if options.symbols {
        pool.push_str(SYMBOL_CHARS);
    }

    let mut chars: Vec<char> = pool.chars().collect();

    if options.exclude_similar {
        chars.retain(|c| !SIMILAR_CHARS.contains(*c));
    }

    if chars.is_empty() {
        return Err(PassError::EmptyPool);
    }

    Ok(chars)
}
