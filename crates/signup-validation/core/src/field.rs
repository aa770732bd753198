//! Registration form field identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One input of the registration form
///
/// Variants are declared in form order; `FieldName::ALL` and the derived
/// `Ord` both follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Age,
}

impl FieldName {
    /// Every field, in the order the form validates them
    pub const ALL: [FieldName; 5] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::Age,
    ];

    /// The identifier used by the HTML form (`fullName`, `confirmPassword`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
            FieldName::Age => "age",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a registration field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0:?}")]
pub struct FieldNameError(pub String);

impl FromStr for FieldName {
    type Err = FieldNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FieldNameError(s.to_string()))
    }
}
