//! Password strength indicator

use serde::Serialize;

use crate::password::input_length;
use crate::rules::RuleSet;

/// Score from 0 to 4, one point per satisfied hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PasswordStrength(u8);

impl PasswordStrength {
    pub fn score(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            0 | 1 => "weak",
            2 => "fair",
            3 => "good",
            _ => "strong",
        }
    }
}

impl RuleSet {
    /// Hints: long enough, has an uppercase letter, has a digit, has a special
    pub fn password_strength(&self, password: &str) -> PasswordStrength {
        let config = self.config();
        let hints = [
            input_length(password) >= config.min_password_length,
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| config.password_specials.contains(c)),
        ];
        PasswordStrength(hints.iter().filter(|hit| **hit).count() as u8)
    }
}

/// Strength with the stock rules
pub fn password_strength(password: &str) -> PasswordStrength {
    RuleSet::standard().password_strength(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores() {
        assert_eq!(password_strength("").score(), 0);
        assert_eq!(password_strength("abc").score(), 0);
        assert_eq!(password_strength("abcdefgh").score(), 1);
        assert_eq!(password_strength("Abcdefgh").score(), 2);
        assert_eq!(password_strength("Abcdefg1").score(), 3);
        assert_eq!(password_strength("Abcdef1!").score(), 4);
        // lowercase is not a hint
        assert_eq!(password_strength("A1!").score(), 3);
    }

    #[test]
    fn test_labels() {
        assert_eq!(password_strength("abc").label(), "weak");
        assert_eq!(password_strength("abcdefgh").label(), "weak");
        assert_eq!(password_strength("Abcdefgh").label(), "fair");
        assert_eq!(password_strength("Abcdefg1").label(), "good");
        assert_eq!(password_strength("Abcdef1!").label(), "strong");
    }
}
