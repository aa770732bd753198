//! Browser tests for the bindings; run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use serde::Deserialize;
use signup_validation_wasm::{
    password_strength, password_strength_label, register_another_prompt, validate_field,
    validate_form, FormSession,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Verdict {
    field: String,
    is_valid: bool,
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Outcome {
    is_valid: bool,
    message: String,
    #[serde(default)]
    banner: Option<String>,
    fields: Vec<Verdict>,
}

fn form(password: &str, confirmation: &str) -> JsValue {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Form<'a> {
        full_name: &'a str,
        email: &'a str,
        password: &'a str,
        confirm_password: &'a str,
        age: &'a str,
    }
    serde_wasm_bindgen::to_value(&Form {
        full_name: "Jane Doe",
        email: "jane@example.com",
        password,
        confirm_password: confirmation,
        age: "30",
    })
    .unwrap()
}

#[wasm_bindgen_test]
fn validates_single_field() {
    let verdict: Verdict =
        serde_wasm_bindgen::from_value(validate_field("age", "17", JsValue::NULL).unwrap())
            .unwrap();
    assert_eq!(verdict.field, "age");
    assert!(!verdict.is_valid);
    assert_eq!(verdict.message, "You must be 18 or older to register");
}

#[wasm_bindgen_test]
fn rejects_unknown_field() {
    assert!(validate_field("nickname", "jd", JsValue::UNDEFINED).is_err());
}

#[wasm_bindgen_test]
fn validates_whole_form() {
    let ok: Outcome = serde_wasm_bindgen::from_value(validate_form(form("Abcdef1!", "Abcdef1!")).unwrap())
        .unwrap();
    assert!(ok.is_valid);
    assert_eq!(ok.message, "🎉 Registration successful! Welcome, Jane Doe!");
    assert_eq!(
        ok.banner.as_deref(),
        Some("Welcome, Jane Doe! Your account has been created successfully.")
    );
    assert_eq!(ok.fields.len(), 5);

    let bad: Outcome = serde_wasm_bindgen::from_value(validate_form(form("Abcdef1!", "nope")).unwrap())
        .unwrap();
    assert!(!bad.is_valid);
    assert_eq!(bad.banner, None);
    assert_eq!(bad.message, "Please fix the following errors:\n\nPasswords do not match");
}

#[wasm_bindgen_test]
fn session_round() {
    let mut session = FormSession::new();
    let checked: Vec<Verdict> =
        serde_wasm_bindgen::from_value(session.input("email", "a@b").unwrap()).unwrap();
    assert!(checked.is_empty());

    let verdict: Verdict = serde_wasm_bindgen::from_value(session.blur("email").unwrap()).unwrap();
    assert!(!verdict.is_valid);

    let outcome: Outcome = serde_wasm_bindgen::from_value(session.submit().unwrap()).unwrap();
    assert!(!outcome.is_valid);
    session.reset();
}

#[wasm_bindgen_test]
fn strength_score() {
    assert_eq!(password_strength("Abcdef1!"), 4);
    assert_eq!(password_strength(""), 0);
    assert_eq!(password_strength_label("Abcdef1!"), "strong");
    assert_eq!(password_strength_label("Abcdefgh"), "fair");
    assert_eq!(password_strength_label(""), "weak");
}

#[wasm_bindgen_test]
fn follow_up_prompt() {
    assert_eq!(
        register_another_prompt(),
        "Registration successful! Would you like to register another user?"
    );
}
