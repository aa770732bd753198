//! Password validation functions

use crate::messages;

/// Special characters accepted (and required) by default
pub const DEFAULT_SPECIALS: &str = "@$!%*?&";

/// Length as a browser input reports it (UTF-16 code units)
pub(crate) fn input_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validates a password field
///
/// In order: required, at least `min_length` long, then composition. The
/// password must contain a lowercase letter, an uppercase letter, a digit and
/// one of `specials`, and may contain nothing else (ASCII letters, ASCII
/// digits and `specials` only).
pub fn validate_password(value: &str, min_length: usize, specials: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(messages::PASSWORD_REQUIRED.to_string());
    }
    if input_length(value) < min_length {
        return Err(format!(
            "Password must be at least {} characters long",
            min_length
        ));
    }

    let is_special = |c: char| specials.contains(c);
    let checks = [
        value.chars().any(|c| c.is_ascii_lowercase()),
        value.chars().any(|c| c.is_ascii_uppercase()),
        value.chars().any(|c| c.is_ascii_digit()),
        value.chars().any(is_special),
        value.chars().all(|c| c.is_ascii_alphanumeric() || is_special(c)),
    ];

    checks
        .iter()
        .all(|passed| *passed)
        .then_some(())
        .ok_or_else(|| messages::PASSWORD_COMPOSITION.to_string())
}

/// Validates the confirmation field against the password, byte for byte
pub fn validate_confirmation(value: &str, password: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(messages::CONFIRM_REQUIRED.to_string());
    }
    (value == password)
        .then_some(())
        .ok_or_else(|| messages::PASSWORDS_DIFFER.to_string())
}
