//! Live validation state of a registration form being filled in
//!
//! Inputs start out pristine. Leaving an input (blur) validates it; typing
//! into an input only re-validates it once it has been marked invalid, so the
//! user is not nagged mid-word. Editing the password re-checks a confirmation
//! the user has already typed. Submitting validates everything.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, trace};

use crate::field::FieldName;
use crate::form::{welcome_message, FormReport};
use crate::result::ValidationResult;
use crate::rules::RuleSet;
use crate::snapshot::FormSnapshot;

/// Display state of one input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "camelCase")]
pub enum FieldState {
    /// Not validated yet
    #[default]
    Pristine,
    Valid,
    Invalid(String),
}

impl FieldState {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldState::Invalid(_))
    }
}

impl From<&ValidationResult> for FieldState {
    fn from(result: &ValidationResult) -> Self {
        if result.is_valid() {
            FieldState::Valid
        } else {
            FieldState::Invalid(result.message().to_string())
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormSession {
    rules: RuleSet,
    values: FormSnapshot,
    states: BTreeMap<FieldName, FieldState>,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// Session using the stock rules
    pub fn new() -> Self {
        Self::with_rules(RuleSet::standard().clone())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            values: FormSnapshot::new(),
            states: BTreeMap::new(),
        }
    }

    pub fn values(&self) -> &FormSnapshot {
        &self.values
    }

    pub fn state(&self, field: FieldName) -> &FieldState {
        static PRISTINE: FieldState = FieldState::Pristine;
        self.states.get(&field).unwrap_or(&PRISTINE)
    }

    /// The user left `field`
    pub fn blur(&mut self, field: FieldName) -> ValidationResult {
        trace!(field = %field, "blur");
        self.check(field)
    }

    /// The user changed `field` to `value`
    ///
    /// Returns the fields that were re-validated as a consequence, with
    /// their results.
    pub fn input(&mut self, field: FieldName, value: &str) -> Vec<(FieldName, ValidationResult)> {
        trace!(field = %field, "input");
        self.values.set(field, value);

        let mut checked = Vec::new();
        if self.state(field).is_invalid() {
            checked.push((field, self.check(field)));
        }
        if field == FieldName::Password && !self.values.get(FieldName::ConfirmPassword).is_empty() {
            checked.push((
                FieldName::ConfirmPassword,
                self.check(FieldName::ConfirmPassword),
            ));
        }
        checked
    }

    /// Validates every field; `Ok` carries the welcome text, `Err` the error
    /// summary
    pub fn submit(&mut self) -> Result<String, String> {
        match self.submit_report().summary() {
            None => Ok(welcome_message(&self.values)),
            Some(summary) => Err(summary),
        }
    }

    /// Validates every field, updating their states, and returns the report
    pub fn submit_report(&mut self) -> FormReport {
        let report = self.rules.validate_form(&self.values);
        self.record(&report);
        if !report.is_valid() {
            debug!(errors = report.errors().count(), "submit rejected");
        }
        report
    }

    /// Clears every value and state
    pub fn reset(&mut self) {
        trace!("reset");
        self.values.clear();
        self.states.clear();
    }

    fn check(&mut self, field: FieldName) -> ValidationResult {
        let result = self.rules.validate_in(field, &self.values);
        self.states.insert(field, FieldState::from(&result));
        result
    }

    fn record(&mut self, report: &FormReport) {
        for (field, result) in report.results() {
            self.states.insert(field, FieldState::from(result));
        }
    }
}
