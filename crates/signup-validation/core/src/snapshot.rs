//! Point-in-time values of the registration form

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::field::FieldName;

/// Current value of each input, keyed by field
///
/// Missing fields read as the empty string, which is what an untouched
/// input holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    values: BTreeMap<FieldName, String>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: FieldName) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(FieldName, S)> for FormSnapshot {
    fn from_iter<I: IntoIterator<Item = (FieldName, S)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(field, value)| (field, value.into()))
                .collect(),
        }
    }
}
