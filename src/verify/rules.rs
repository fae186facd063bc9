//! Validation rules for target words and the rename prefix.
//!
//! Pure functions with no I/O or side effects.

use crate::error::{RenameError, Result};
use std::collections::HashSet;

/// Validates a single target word.
///
/// ## Rules
/// - Not empty
/// - Contains only ASCII word characters `[a-zA-Z0-9_]`
///
/// An empty word would match at every word boundary, and any other character
/// would sit outside the `\b` anchors the matcher relies on.
pub fn validate_word(word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(RenameError::InvalidWord(
            word.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    if let Some((idx, ch)) = first_non_word_char(word) {
        return Err(RenameError::InvalidWord(
            word.to_string(),
            format!("invalid character '{}' at position {}", ch, idx),
        ));
    }

    Ok(())
}

/// Validates an ordered list of target words.
///
/// Each word must pass [`validate_word`], the list must not be empty, and no
/// word may appear twice.
pub fn validate_words<S: AsRef<str>>(words: &[S]) -> Result<()> {
    if words.is_empty() {
        return Err(RenameError::InvalidWord(
            String::new(),
            "at least one target word is required".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for word in words {
        let word = word.as_ref();
        validate_word(word)?;
        if !seen.insert(word) {
            return Err(RenameError::InvalidWord(
                word.to_string(),
                "listed more than once".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates the literal prefix prepended to every target word.
///
/// ## Rules
/// - Not empty
/// - Contains only ASCII word characters `[a-zA-Z0-9_]`
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.is_empty() {
        return Err(RenameError::InvalidPrefix(
            prefix.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    if let Some((idx, ch)) = first_non_word_char(prefix) {
        return Err(RenameError::InvalidPrefix(
            prefix.to_string(),
            format!("invalid character '{}' at position {}", ch, idx),
        ));
    }

    Ok(())
}

fn first_non_word_char(s: &str) -> Option<(usize, char)> {
    s.chars()
        .enumerate()
        .find(|(_, ch)| !(ch.is_ascii_alphanumeric() || *ch == '_'))
}
