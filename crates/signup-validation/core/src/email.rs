//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::messages;
use crate::whitespace;

/// Something before an `@`, something after it, and a dot in the domain.
/// Whitespace (including U+FEFF) and a second `@` are rejected anywhere.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

/// Checks the address shape only; does not trim
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates an email field: required (after trimming), then shape
pub fn validate_email(value: &str) -> Result<(), String> {
    if whitespace::trim(value).is_empty() {
        return Err(messages::EMAIL_REQUIRED.to_string());
    }
    if !is_valid_email(value) {
        return Err(messages::EMAIL_INVALID.to_string());
    }
    Ok(())
}
