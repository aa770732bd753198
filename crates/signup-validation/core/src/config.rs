// File: src/config.rs
// Purpose: Rule parameters, optionally loaded from signup.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::password::DEFAULT_SPECIALS;
use crate::rules::{RuleSet, RuleSetError};

/// Tunable parameters of the registration rules
///
/// Every key is optional; the defaults are the stock registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Words required in the full name
    pub min_name_words: usize,

    /// Minimum password length, in the units a browser input reports
    pub min_password_length: usize,

    /// Special characters a password must include one of
    pub password_specials: String,

    pub min_age: i64,

    pub max_age: i64,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            min_name_words: 2,
            min_password_length: 8,
            password_specials: DEFAULT_SPECIALS.to_string(),
            min_age: 18,
            max_age: 120,
        }
    }
}

impl RuleConfig {
    /// Load configuration from a TOML file
    ///
    /// A missing or blank file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules file: {:?}", path))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse rules file: {:?}", path))
    }

    /// Load configuration from the default path (./signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("signup.toml")
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(content)?)
    }

    /// Checks the parameters and produces a rule set
    pub fn build(self) -> Result<RuleSet, RuleSetError> {
        RuleSet::new(self)
    }
}
