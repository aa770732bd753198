//! The registration rule set
//!
//! Each field has an ordered list of checks; the first failing check decides
//! the message. A [`RuleSet`] carries the tunable parameters and dispatches a
//! field to its checks.

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::debug;

use crate::age::validate_age;
use crate::config::RuleConfig;
use crate::email::validate_email;
use crate::field::FieldName;
use crate::name::validate_full_name;
use crate::password::{validate_confirmation, validate_password};
use crate::result::ValidationResult;
use crate::snapshot::FormSnapshot;

/// Rejected rule parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSetError {
    #[error("min_age ({min}) is greater than max_age ({max})")]
    AgeBounds { min: i64, max: i64 },

    #[error("min_name_words must be at least 1")]
    NoNameWords,

    #[error("min_password_length must be at least 1")]
    NoPasswordLength,

    #[error("password_specials must not be empty")]
    NoSpecials,

    #[error("password_specials may not contain letters, digits or whitespace (found {0:?})")]
    BadSpecial(char),
}

static DEFAULT_RULES: Lazy<RuleSet> = Lazy::new(RuleSet::default);

/// Checked rule parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    config: RuleConfig,
}

impl RuleSet {
    pub fn new(config: RuleConfig) -> Result<Self, RuleSetError> {
        if config.min_age > config.max_age {
            return Err(RuleSetError::AgeBounds {
                min: config.min_age,
                max: config.max_age,
            });
        }
        if config.min_name_words == 0 {
            return Err(RuleSetError::NoNameWords);
        }
        if config.min_password_length == 0 {
            return Err(RuleSetError::NoPasswordLength);
        }
        if config.password_specials.is_empty() {
            return Err(RuleSetError::NoSpecials);
        }
        if let Some(c) = config
            .password_specials
            .chars()
            .find(|c| c.is_alphanumeric() || c.is_whitespace())
        {
            return Err(RuleSetError::BadSpecial(c));
        }

        Ok(Self { config })
    }

    /// Shared instance with the stock parameters
    pub fn standard() -> &'static RuleSet {
        &DEFAULT_RULES
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Validates one field value. `context` supplies the other fields; only
    /// `confirmPassword` reads from it (the password to compare against).
    pub fn validate(&self, field: FieldName, value: &str, context: &FormSnapshot) -> ValidationResult {
        let config = &self.config;
        let outcome = match field {
            FieldName::FullName => validate_full_name(value, config.min_name_words),
            FieldName::Email => validate_email(value),
            FieldName::Password => validate_password(
                value,
                config.min_password_length,
                &config.password_specials,
            ),
            FieldName::ConfirmPassword => {
                validate_confirmation(value, context.get(FieldName::Password))
            }
            FieldName::Age => validate_age(value, config.min_age, config.max_age),
        };

        if let Err(message) = &outcome {
            debug!(field = %field, %message, "field failed validation");
        }
        outcome.into()
    }

    /// Validates the snapshot's own value for `field`
    pub fn validate_in(&self, field: FieldName, snapshot: &FormSnapshot) -> ValidationResult {
        self.validate(field, snapshot.get(field), snapshot)
    }
}

/// Validates one field value with the stock rules
pub fn validate(field: FieldName, value: &str, context: &FormSnapshot) -> ValidationResult {
    RuleSet::standard().validate(field, value, context)
}
