//! Fixed feedback text shown next to the form inputs

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const EMAIL_REQUIRED: &str = "Email address is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_COMPOSITION: &str =
    "Password must contain at least one uppercase letter, one number, and one special character";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";
pub const AGE_REQUIRED: &str = "Age is required";
pub const AGE_OUT_OF_RANGE: &str = "Please enter a valid age";

/// Question asked once the success message has been shown, offering to
/// clear the form
pub const REGISTER_ANOTHER_PROMPT: &str =
    "Registration successful! Would you like to register another user?";

/// Heading of the submit-time error summary
pub const SUMMARY_HEADER: &str = "Please fix the following errors:";
