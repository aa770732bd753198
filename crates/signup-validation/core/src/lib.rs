//! Signup Validation Core
//!
//! Pure validation rules for the user registration form (full name, email,
//! password, password confirmation, age). Every check is a deterministic
//! function of the submitted values; rendering the feedback is left to the
//! host page. Used directly on the server and through the WASM bindings in
//! the browser.
//!
//! ```
//! use signup_validation::{validate, FieldName, FormSnapshot};
//!
//! let form = FormSnapshot::new().with(FieldName::Password, "Abcdef1!");
//! assert!(validate(FieldName::ConfirmPassword, "Abcdef1!", &form).is_valid());
//! assert!(!validate(FieldName::Age, "17", &form).is_valid());
//! ```

pub mod age;
pub mod config;
pub mod email;
pub mod field;
pub mod form;
pub mod messages;
pub mod name;
pub mod password;
pub mod result;
pub mod rules;
pub mod session;
pub mod snapshot;
pub mod strength;
pub mod whitespace;

pub use config::RuleConfig;
pub use field::{FieldName, FieldNameError};
pub use form::{success_banner, validate_form, welcome_message, FormReport};
pub use result::ValidationResult;
pub use rules::{validate, RuleSet, RuleSetError};
pub use session::{FieldState, FormSession};
pub use snapshot::FormSnapshot;
pub use strength::{password_strength, PasswordStrength};
