//! Outcome of validating a single field

use serde::{Deserialize, Serialize};

/// Verdict for one field value
///
/// `message` is empty exactly when `is_valid` is true. The fields are private
/// so the only way to build one is through [`ValidationResult::valid`] and
/// [`ValidationResult::invalid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    message: String,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    /// A failing verdict. An empty message is replaced with a generic one so
    /// that an invalid result always carries text.
    pub fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            "Invalid value".to_string()
        } else {
            message
        };
        Self {
            is_valid: false,
            message,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Converts into the `Result<(), String>` shape used by the rule functions
    pub fn into_result(self) -> Result<(), String> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.message)
        }
    }
}

impl From<Result<(), String>> for ValidationResult {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => ValidationResult::valid(),
            Err(message) => ValidationResult::invalid(message),
        }
    }
}
