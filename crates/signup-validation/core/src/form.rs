//! Whole-form validation and submit feedback

use serde::Serialize;

use crate::field::FieldName;
use crate::messages::SUMMARY_HEADER;
use crate::result::ValidationResult;
use crate::rules::RuleSet;
use crate::snapshot::FormSnapshot;

/// Per-field results for one submit attempt, in form order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormReport {
    results: Vec<(FieldName, ValidationResult)>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, result)| result.is_valid())
    }

    pub fn get(&self, field: FieldName) -> Option<&ValidationResult> {
        self.results
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, result)| result)
    }

    pub fn results(&self) -> impl Iterator<Item = (FieldName, &ValidationResult)> {
        self.results.iter().map(|(field, result)| (*field, result))
    }

    /// Messages of the failing fields, in form order
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter(|(_, result)| !result.is_valid())
            .map(|(_, result)| result.message())
    }

    /// Text shown when submission is blocked; `None` if every field passed
    pub fn summary(&self) -> Option<String> {
        if self.is_valid() {
            return None;
        }
        let errors: Vec<&str> = self.errors().collect();
        Some(format!("{}\n\n{}", SUMMARY_HEADER, errors.join("\n")))
    }
}

impl RuleSet {
    /// Validates every field of the snapshot
    pub fn validate_form(&self, snapshot: &FormSnapshot) -> FormReport {
        let results = FieldName::ALL
            .into_iter()
            .map(|field| (field, self.validate_in(field, snapshot)))
            .collect();
        FormReport { results }
    }
}

/// Validates every field with the stock rules
pub fn validate_form(snapshot: &FormSnapshot) -> FormReport {
    RuleSet::standard().validate_form(snapshot)
}

/// Greeting shown after a successful registration
pub fn welcome_message(snapshot: &FormSnapshot) -> String {
    format!(
        "🎉 Registration successful! Welcome, {}!",
        snapshot.get(FieldName::FullName)
    )
}

/// Body of the success banner placed under the form
pub fn success_banner(snapshot: &FormSnapshot) -> String {
    format!(
        "Welcome, {}! Your account has been created successfully.",
        snapshot.get(FieldName::FullName)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete() -> FormSnapshot {
        FormSnapshot::new()
            .with(FieldName::FullName, "Jane Doe")
            .with(FieldName::Email, "jane@example.com")
            .with(FieldName::Password, "Abcdef1!")
            .with(FieldName::ConfirmPassword, "Abcdef1!")
            .with(FieldName::Age, "30")
    }

    #[test]
    fn test_complete_form_passes() {
        let report = validate_form(&complete());
        assert!(report.is_valid());
        assert_eq!(report.errors().count(), 0);
        assert_eq!(report.summary(), None);
        assert_eq!(report.results().count(), 5);
    }

    #[test]
    fn test_summary_lists_errors_in_order() {
        let snapshot = complete()
            .with(FieldName::FullName, "Jane")
            .with(FieldName::Age, "17");
        let report = validate_form(&snapshot);

        assert!(!report.is_valid());
        assert_eq!(
            report.summary().unwrap(),
            "Please fix the following errors:\n\n\
             Full name must contain at least 2 words\n\
             You must be 18 or older to register"
        );
        assert!(report.get(FieldName::Email).unwrap().is_valid());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let report = validate_form(&FormSnapshot::new());
        let errors: Vec<&str> = report.errors().collect();
        assert_eq!(
            errors,
            vec![
                "Full name is required",
                "Email address is required",
                "Password is required",
                "Please confirm your password",
                "Age is required",
            ]
        );
    }

    #[test]
    fn test_welcome_uses_raw_name() {
        let snapshot = complete().with(FieldName::FullName, " Jane  Doe ");
        assert_eq!(
            welcome_message(&snapshot),
            "🎉 Registration successful! Welcome,  Jane  Doe !"
        );
    }

    #[test]
    fn test_success_texts() {
        let snapshot = complete();
        assert_eq!(
            welcome_message(&snapshot),
            "🎉 Registration successful! Welcome, Jane Doe!"
        );
        assert_eq!(
            success_banner(&snapshot),
            "Welcome, Jane Doe! Your account has been created successfully."
        );
        assert_eq!(
            crate::messages::REGISTER_ANOTHER_PROMPT,
            "Registration successful! Would you like to register another user?"
        );
    }
}
