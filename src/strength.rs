//! Heuristic password strength scoring
//!
//! Deterministic, pure scoring of a password's characters: length
//! contributes up to 40 points, character variety up to 60, and simple
//! pattern penalties are deducted before clamping to 0-100.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative strength level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    /// Map a clamped score to a level
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=29 => StrengthLevel::Weak,
            30..=59 => StrengthLevel::Fair,
            60..=79 => StrengthLevel::Good,
            _ => StrengthLevel::Strong,
        }
    }

    /// Style identifier for display collaborators
    pub fn tag(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "strength-weak",
            StrengthLevel::Fair => "strength-fair",
            StrengthLevel::Good => "strength-good",
            StrengthLevel::Strong => "strength-strong",
        }
    }

    /// Improvement suggestions for this level
    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            StrengthLevel::Weak => &[
                "Increase password length to at least 12 characters",
                "Add numbers and special characters",
                "Use a mix of uppercase and lowercase letters",
            ],
            StrengthLevel::Fair => &[
                "Consider increasing length further",
                "Add more variety of character types",
                "Avoid common words and patterns",
            ],
            StrengthLevel::Good => &[
                "Your password is reasonably strong",
                "Consider using a passphrase for even better security",
            ],
            StrengthLevel::Strong => &[
                "Excellent password strength!",
                "Consider using a password manager to store it securely",
            ],
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        };
        write!(f, "{}", name)
    }
}

/// Scoring outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    /// Score in 0-100
    pub score: u8,
    /// Qualitative level derived from the score
    pub level: StrengthLevel,
}

impl StrengthResult {
    /// Style identifier for display collaborators
    pub fn tag(&self) -> &'static str {
        self.level.tag()
    }
}

/// Detailed strength breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthAnalysis {
    pub score: u8,
    pub level: StrengthLevel,
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digits: bool,
    pub has_symbols: bool,
    pub suggestions: Vec<String>,
}

/// Score a password.
///
/// The score is length (3 points per character, capped at 40) plus a
/// variety bonus of 15 points per satisfied character class beyond the
/// first, minus pattern penalties: 20 for any character repeated three
/// or more times in a row, 15 for letters-only passwords, 20 for
/// digits-only passwords. The result is clamped to 0-100.
pub fn score(password: &str) -> StrengthResult {
    let length = password.chars().count();
    let mut score = (length * 3).min(40) as i32;

    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digits = password.chars().any(|c| c.is_ascii_digit());
    let has_symbols = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let variety = [has_lowercase, has_uppercase, has_digits, has_symbols]
        .iter()
        .filter(|present| **present)
        .count() as i32;
    score += (variety - 1) * 15;

    // Penalties apply independently, not mutually exclusively
    if has_repeated_run(password) {
        score -= 20;
    }
    if !password.is_empty() && password.chars().all(|c| c.is_ascii_alphabetic()) {
        score -= 15;
    }
    if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
        score -= 20;
    }

    let score = score.clamp(0, 100) as u8;

    StrengthResult {
        score,
        level: StrengthLevel::from_score(score),
    }
}

/// Full analysis of a password, including per-class presence flags and
/// level-specific suggestions.
pub fn analyze(password: &str) -> StrengthAnalysis {
    let result = score(password);

    StrengthAnalysis {
        score: result.score,
        level: result.level,
        length: password.chars().count(),
        has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        has_digits: password.chars().any(|c| c.is_ascii_digit()),
        has_symbols: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        suggestions: result
            .level
            .suggestions()
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

/// True if any character appears three or more times consecutively
fn has_repeated_run(password: &str) -> bool {
    let mut run = 0;
    let mut prev: Option<char> = None;

    for c in password.chars() {
        if Some(c) == prev {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_lowercase() {
        // base 30, one class, repeated run -20, letters-only -15 -> clamped to 0
        let result = score("aaaaaaaaaa");
        assert_eq!(result.score, 0);
        assert_eq!(result.level, StrengthLevel::Weak);
    }

    #[test]
    fn test_all_four_classes() {
        // base 24, variety +45, no penalties -> 69
        let result = score("Ab3!Xy9#");
        assert_eq!(result.score, 69);
        assert_eq!(result.level, StrengthLevel::Good);
    }

    #[test]
    fn test_digits_only() {
        // base 24, one class, digits-only -20 -> 4
        let result = score("12345678");
        assert_eq!(result.score, 4);
        assert_eq!(result.level, StrengthLevel::Weak);
    }

    #[test]
    fn test_empty_password() {
        let result = score("");
        assert_eq!(result.score, 0);
        assert_eq!(result.level, StrengthLevel::Weak);
    }

    #[test]
    fn test_letters_only_penalty() {
        // base 24, two classes +15, letters-only -15 -> 24
        let result = score("AbCdEfGh");
        assert_eq!(result.score, 24);
        assert_eq!(result.level, StrengthLevel::Weak);
    }

    #[test]
    fn test_long_all_class_password_is_strong() {
        // base capped at 40, variety +45 -> 85
        let result = score("Ab3!Xy9#Qw2$Zr");
        assert_eq!(result.score, 85);
        assert_eq!(result.level, StrengthLevel::Strong);
    }

    #[test]
    fn test_penalties_are_independent() {
        // base 30, one class, repeated run -20, digits-only -20 -> 0
        let result = score("1112223334");
        assert_eq!(result.score, 0);
        assert_eq!(result.level, StrengthLevel::Weak);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(29), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(30), StrengthLevel::Fair);
        assert_eq!(StrengthLevel::from_score(59), StrengthLevel::Fair);
        assert_eq!(StrengthLevel::from_score(60), StrengthLevel::Good);
        assert_eq!(StrengthLevel::from_score(79), StrengthLevel::Good);
        assert_eq!(StrengthLevel::from_score(80), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(100), StrengthLevel::Strong);
    }

    #[test]
    fn test_level_tags() {
        assert_eq!(StrengthLevel::Weak.tag(), "strength-weak");
        assert_eq!(StrengthLevel::Fair.tag(), "strength-fair");
        assert_eq!(StrengthLevel::Good.tag(), "strength-good");
        assert_eq!(StrengthLevel::Strong.tag(), "strength-strong");
    }

    #[test]
    fn test_level_display() {
        assert_eq!(StrengthLevel::Weak.to_string(), "Weak");
        assert_eq!(StrengthLevel::Strong.to_string(), "Strong");
    }

    #[test]
    fn test_has_repeated_run() {
        assert!(has_repeated_run("aaab"));
        assert!(has_repeated_run("baaa"));
        assert!(has_repeated_run("xx111yy"));
        assert!(!has_repeated_run("aabb"));
        assert!(!has_repeated_run("ababab"));
        assert!(!has_repeated_run(""));
        assert!(!has_repeated_run("aa"));
    }

    #[test]
    fn test_score_is_deterministic() {
        assert_eq!(score("Tr0ub4dor&3"), score("Tr0ub4dor&3"));
    }

    #[test]
    fn test_analyze_flags() {
        let analysis = analyze("Ab3!Xy9#");
        assert_eq!(analysis.score, 69);
        assert_eq!(analysis.level, StrengthLevel::Good);
        assert_eq!(analysis.length, 8);
        assert!(analysis.has_lowercase);
        assert!(analysis.has_uppercase);
        assert!(analysis.has_digits);
        assert!(analysis.has_symbols);
        assert!(!analysis.suggestions.is_empty());
    }

    #[test]
    fn test_analyze_digits_only() {
        let analysis = analyze("12345678");
        assert!(!analysis.has_lowercase);
        assert!(!analysis.has_uppercase);
        assert!(analysis.has_digits);
        assert!(!analysis.has_symbols);
        assert_eq!(analysis.level, StrengthLevel::Weak);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        let analysis = analyze("pässwört");
        assert!(analysis.has_symbols);
    }
}
