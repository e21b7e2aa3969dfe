//! Name sanitization for module segments, entry names and parameter names.
//!
//! Raw keys are trimmed, split into words on whitespace, `-` and `_`, and
//! stripped of anything that is not an ASCII letter or digit. The surviving
//! words are joined in PascalCase for module segments and camelCase for
//! entries and parameters. A result starting with a digit gets a `T`/`t`
//! prefix.

use elmi18n_core::{split_words, to_camel_case, to_pascal_case};

/// Why a raw key could not be turned into an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeError {
    /// The key is empty or whitespace only.
    Blank,
    /// The key has text but no ASCII letters or digits.
    Invalid,
}

/// Sanitize a key into a PascalCase module segment.
pub fn module_segment(raw: &str) -> Result<String, SanitizeError> {
    check(raw)?;
    Ok(to_pascal_case(raw))
}

/// Sanitize a key or placeholder into a camelCase identifier.
pub fn identifier(raw: &str) -> Result<String, SanitizeError> {
    check(raw)?;
    Ok(to_camel_case(raw))
}

fn check(raw: &str) -> Result<(), SanitizeError> {
    if raw.trim().is_empty() {
        Err(SanitizeError::Blank)
    } else if split_words(raw).is_empty() {
        Err(SanitizeError::Invalid)
    } else {
        Ok(())
    }
}
