//! Signup Validation WASM
//!
//! WebAssembly bindings for the registration rules.
//! Lets the browser run the same checks the server runs, field by field
//! while the user types and once more on submit.

use serde::Serialize;
use signup_validation as signup;
use signup_validation::{FieldName, FormSnapshot};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// One field's verdict as handed to JavaScript
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FieldVerdict {
    pub field: String,
    pub is_valid: bool,
    pub message: String,
}

impl FieldVerdict {
    fn new(field: FieldName, result: &signup::ValidationResult) -> Self {
        Self {
            field: field.to_string(),
            is_valid: result.is_valid(),
            message: result.message().to_string(),
        }
    }
}

/// Submit outcome as handed to JavaScript
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOutcome {
    pub is_valid: bool,
    /// Welcome text on success, error summary otherwise
    pub message: String,
    /// Success banner body; absent when submission is blocked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    pub fields: Vec<FieldVerdict>,
}

fn parse_field(field: &str) -> Result<FieldName, JsValue> {
    field
        .parse::<FieldName>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_snapshot(snapshot: JsValue) -> Result<FormSnapshot, JsValue> {
    if snapshot.is_undefined() || snapshot.is_null() {
        return Ok(FormSnapshot::new());
    }
    serde_wasm_bindgen::from_value(snapshot)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

/// Validate a single field value
///
/// # Example (JavaScript)
/// ```javascript
/// const verdict = validateField('confirmPassword', 'Abcdef1!', {
///     password: 'Abcdef1!'
/// });
/// // { field: 'confirmPassword', isValid: true, message: '' }
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field: &str, value: &str, snapshot: JsValue) -> Result<JsValue, JsValue> {
    let field = parse_field(field)?;
    let snapshot = parse_snapshot(snapshot)?;
    let result = signup::validate(field, value, &snapshot);
    to_js(&FieldVerdict::new(field, &result))
}

/// Validate every field of the form
///
/// # Example (JavaScript)
/// ```javascript
/// const outcome = validateForm(Object.fromEntries(new FormData(form)));
/// if (!outcome.isValid) alert(outcome.message);
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(snapshot: JsValue) -> Result<JsValue, JsValue> {
    let snapshot = parse_snapshot(snapshot)?;
    let report = signup::validate_form(&snapshot);
    to_js(&outcome(&report, &snapshot))
}

fn outcome(report: &signup::FormReport, snapshot: &FormSnapshot) -> SubmitOutcome {
    let fields = report
        .results()
        .map(|(field, result)| FieldVerdict::new(field, result))
        .collect();
    match report.summary() {
        None => SubmitOutcome {
            is_valid: true,
            message: signup::welcome_message(snapshot),
            banner: Some(signup::success_banner(snapshot)),
            fields,
        },
        Some(summary) => SubmitOutcome {
            is_valid: false,
            message: summary,
            banner: None,
            fields,
        },
    }
}

/// Strength score (0-4) for the password indicator
#[wasm_bindgen(js_name = passwordStrength)]
pub fn password_strength(password: &str) -> u8 {
    signup::password_strength(password).score()
}

/// Strength label (`weak`, `fair`, `good` or `strong`) for the indicator
#[wasm_bindgen(js_name = passwordStrengthLabel)]
pub fn password_strength_label(password: &str) -> String {
    signup::password_strength(password).label().to_string()
}

/// Question to ask after a successful registration before clearing the form
#[wasm_bindgen(js_name = registerAnotherPrompt)]
pub fn register_another_prompt() -> String {
    signup::messages::REGISTER_ANOTHER_PROMPT.to_string()
}

/// Live form state, one per `<form>` element
#[wasm_bindgen]
pub struct FormSession {
    inner: signup::FormSession,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl FormSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FormSession {
        FormSession {
            inner: signup::FormSession::new(),
        }
    }

    /// Call on the input's `blur` event
    pub fn blur(&mut self, field: &str) -> Result<JsValue, JsValue> {
        let field = parse_field(field)?;
        let result = self.inner.blur(field);
        to_js(&FieldVerdict::new(field, &result))
    }

    /// Call on the input's `input` event; returns the verdicts of any fields
    /// that were re-validated
    pub fn input(&mut self, field: &str, value: &str) -> Result<JsValue, JsValue> {
        let field = parse_field(field)?;
        let verdicts: Vec<FieldVerdict> = self
            .inner
            .input(field, value)
            .iter()
            .map(|(field, result)| FieldVerdict::new(*field, result))
            .collect();
        to_js(&verdicts)
    }

    /// Current display state of a field (`pristine`, `valid` or `invalid`)
    pub fn state(&self, field: &str) -> Result<JsValue, JsValue> {
        let field = parse_field(field)?;
        to_js(self.inner.state(field))
    }

    pub fn submit(&mut self) -> Result<JsValue, JsValue> {
        let report = self.inner.submit_report();
        to_js(&outcome(&report, self.inner.values()))
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}
