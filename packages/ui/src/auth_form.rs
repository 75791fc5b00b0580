//! Auth form controller: mode switching and field state for the end-user
//! sign-in / sign-up card.
//!
//! The controller holds presentation state only. Submission never contacts a
//! server and never reports domain errors; the page logs the attempt and
//! navigates home. Requiredness is enforced solely through the browser's
//! `required` attribute, driven by [`AuthMode::required_fields`].

use std::collections::HashMap;

/// Canonical field names shared by the form state and the page markup.
pub mod field {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const CONFIRM_PASSWORD: &str = "confirm_password";
    pub const COMPANY: &str = "company";
    pub const INDUSTRY: &str = "industry";
    pub const AGREE_TERMS: &str = "agree_terms";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    /// Mode preselected by the `?mode=` query parameter; anything other than
    /// `register` falls back to login.
    pub fn from_query(value: &str) -> Self {
        if value == "register" {
            AuthMode::Register
        } else {
            AuthMode::Login
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Register => "Create Your Account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in to access your account and saved tools.",
            AuthMode::Register => {
                "Join thousands of professionals discovering the best AI tools."
            }
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Register => "Create Account",
        }
    }

    /// Fields that carry the `required` attribute in this mode. `company`
    /// and `industry` are always optional.
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            AuthMode::Login => &[field::EMAIL, field::PASSWORD],
            AuthMode::Register => &[
                field::FIRST_NAME,
                field::LAST_NAME,
                field::EMAIL,
                field::PASSWORD,
                field::CONFIRM_PASSWORD,
                field::AGREE_TERMS,
            ],
        }
    }
}

/// A single form field value: text inputs store strings, checkboxes store
/// booleans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

/// Mode flag plus field map for the auth card.
///
/// Created on page mount and discarded on navigation; never persisted.
/// Switching modes keeps already-entered values, so an email typed under
/// "Sign In" survives a trip through "Sign Up" and back.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthForm {
    pub mode: AuthMode,
    fields: HashMap<&'static str, FieldValue>,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            fields: HashMap::new(),
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn set_text(&mut self, name: &'static str, value: impl Into<String>) {
        self.fields.insert(name, FieldValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, name: &'static str, checked: bool) {
        self.fields.insert(name, FieldValue::Flag(checked));
    }

    /// Text value of a field, empty until first edited.
    pub fn text(&self, name: &str) -> &str {
        match self.fields.get(name) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    /// Checkbox value of a field, unchecked until first toggled.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(FieldValue::Flag(true)))
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.mode.required_fields().contains(&name)
    }

    /// One-line summary for the submit diagnostic. Passwords are elided.
    pub fn summary(&self) -> String {
        format!(
            "mode={:?} email={} company={} agree_terms={}",
            self.mode,
            self.text(field::EMAIL),
            self.text(field::COMPANY),
            self.flag(field::AGREE_TERMS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_toggles_both_ways() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
        assert_eq!(AuthMode::Register.toggled(), AuthMode::Login);
    }

    #[test]
    fn query_param_selects_mode() {
        assert_eq!(AuthMode::from_query("register"), AuthMode::Register);
        assert_eq!(AuthMode::from_query("login"), AuthMode::Login);
        assert_eq!(AuthMode::from_query(""), AuthMode::Login);
        assert_eq!(AuthMode::from_query("Register"), AuthMode::Login);
    }

    #[test]
    fn toggling_mode_keeps_entered_values() {
        let mut form = AuthForm::new(AuthMode::Login);
        form.set_text(field::EMAIL, "user@example.com");
        form.set_text(field::PASSWORD, "hunter2");

        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::Register);
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::Login);

        assert_eq!(form.text(field::EMAIL), "user@example.com");
        assert_eq!(form.text(field::PASSWORD), "hunter2");
    }

    #[test]
    fn checkbox_fields_store_booleans() {
        let mut form = AuthForm::new(AuthMode::Register);
        assert!(!form.flag(field::AGREE_TERMS));

        form.set_flag(field::AGREE_TERMS, true);
        assert!(form.flag(field::AGREE_TERMS));

        form.set_flag(field::AGREE_TERMS, false);
        assert!(!form.flag(field::AGREE_TERMS));
    }

    #[test]
    fn unedited_fields_read_as_defaults() {
        let form = AuthForm::new(AuthMode::Login);
        assert_eq!(form.text(field::COMPANY), "");
        assert!(!form.flag(field::AGREE_TERMS));
    }

    #[test]
    fn login_requires_email_and_password_only() {
        let form = AuthForm::new(AuthMode::Login);
        assert!(form.is_required(field::EMAIL));
        assert!(form.is_required(field::PASSWORD));
        assert!(!form.is_required(field::CONFIRM_PASSWORD));
        assert!(!form.is_required(field::AGREE_TERMS));
        assert!(!form.is_required(field::COMPANY));
    }

    #[test]
    fn register_adds_names_confirmation_and_terms() {
        let form = AuthForm::new(AuthMode::Register);
        for name in [
            field::FIRST_NAME,
            field::LAST_NAME,
            field::EMAIL,
            field::PASSWORD,
            field::CONFIRM_PASSWORD,
            field::AGREE_TERMS,
        ] {
            assert!(form.is_required(name), "{name} should be required");
        }
        assert!(!form.is_required(field::COMPANY));
        assert!(!form.is_required(field::INDUSTRY));
    }

    #[test]
    fn summary_never_contains_password() {
        let mut form = AuthForm::new(AuthMode::Login);
        form.set_text(field::EMAIL, "user@example.com");
        form.set_text(field::PASSWORD, "s3cret");

        let summary = form.summary();
        assert!(summary.contains("user@example.com"));
        assert!(!summary.contains("s3cret"));
    }
}
