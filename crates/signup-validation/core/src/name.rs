//! Full name validation

use crate::messages;
use crate::whitespace;

/// Validates a full name: required, and at least `min_words` whitespace
/// separated words once surrounding whitespace is trimmed.
pub fn validate_full_name(value: &str, min_words: usize) -> Result<(), String> {
    let trimmed = whitespace::trim(value);
    if trimmed.is_empty() {
        return Err(messages::FULL_NAME_REQUIRED.to_string());
    }

    let words = whitespace::words(trimmed).count();
    (words >= min_words)
        .then_some(())
        .ok_or_else(|| format!("Full name must contain at least {} words", min_words))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert!(validate_full_name("Jane Doe", 2).is_ok());
        assert!(validate_full_name("  Jane   Q.\tDoe ", 2).is_ok());
        assert_eq!(
            validate_full_name("Jane", 2),
            Err("Full name must contain at least 2 words".to_string())
        );
        assert_eq!(
            validate_full_name("   ", 2),
            Err("Full name is required".to_string())
        );
    }

    #[test]
    fn test_zero_width_space_counts_as_whitespace() {
        assert_eq!(
            validate_full_name("\u{FEFF}", 2),
            Err("Full name is required".to_string())
        );
        assert!(validate_full_name("Jane\u{FEFF}Doe", 2).is_ok());
    }

    #[test]
    fn test_configured_word_count() {
        assert!(validate_full_name("Jane Doe", 3).is_err());
        assert!(validate_full_name("Jane", 1).is_ok());
    }
}
