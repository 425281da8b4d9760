// Auth Form - local-only validation state machine
// Two modes (Login / Register) toggled by user action, two states
// (Idle / Submitting). Validation is cosmetic: passing it leads to a
// simulated delay and a success message, never a session or token.

use crate::validation::{ValidationError, ValidationResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fixed simulated sign-in/registration delay; callers do the sleeping
pub const SIGN_IN_DELAY: Duration = Duration::from_millis(1000);

const CONTEXT: &str = "Auth";
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

const MIN_PASSWORD_LEN: usize = 8;
const MIN_NAME_LEN: usize = 2;

// ============================================================================
// MODES & REQUESTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

/// The credentials as entered; name and confirmation only matter when
/// registering
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Success report produced after the simulated delay
#[derive(Debug, Clone, Serialize)]
pub struct AuthOutcome {
    pub mode: AuthMode,
    pub email: String,
    pub message: String,
}

// ============================================================================
// FORM STATE MACHINE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthState {
    Idle,
    Submitting,
}

#[derive(Debug)]
pub struct AuthForm {
    mode: AuthMode,
    state: AuthState,
    pending: Option<AuthRequest>,
}

impl AuthForm {
    /// Fresh form in Login mode
    pub fn new() -> Self {
        AuthForm {
            mode: AuthMode::Login,
            state: AuthState::Idle,
            pending: None,
        }
    }

    pub fn with_mode(mode: AuthMode) -> Self {
        AuthForm {
            mode,
            state: AuthState::Idle,
            pending: None,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Switch between Login and Register
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Validation rules applied before any submission, reported in the
    /// form's display order: email, password, confirmation, name
    pub fn validate(mode: AuthMode, request: &AuthRequest) -> ValidationResult {
        let mut errors = Vec::new();

        let email_re = Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex");
        if !email_re.is_match(&request.email) {
            errors.push(ValidationError::new(
                "email",
                "Please enter a valid email address",
                CONTEXT,
            ));
        }

        if request.password.len() < MIN_PASSWORD_LEN {
            errors.push(ValidationError::new(
                "password",
                "Password must be at least 8 characters long",
                CONTEXT,
            ));
        }

        if mode == AuthMode::Register {
            if request.password != request.confirm_password {
                errors.push(ValidationError::new(
                    "confirmPassword",
                    "Passwords do not match",
                    CONTEXT,
                ));
            }

            if request.name.trim().len() < MIN_NAME_LEN {
                errors.push(ValidationError::new(
                    "name",
                    "Please enter your name (minimum 2 characters)",
                    CONTEXT,
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Idle -> Submitting, gated by validation
    pub fn submit(&mut self, request: AuthRequest) -> ValidationResult {
        if self.state == AuthState::Submitting {
            return Err(vec![ValidationError::new(
                "form",
                "A request is already being processed",
                CONTEXT,
            )]);
        }

        Self::validate(self.mode, &request)?;

        self.pending = Some(request);
        self.state = AuthState::Submitting;
        Ok(())
    }

    /// Submitting -> Idle, reporting success
    ///
    /// Callers sleep [`SIGN_IN_DELAY`] first. A successful registration
    /// clears the entered values and drops the form back to Login mode.
    pub fn complete(&mut self) -> Option<AuthOutcome> {
        if self.state != AuthState::Submitting {
            return None;
        }

        let request = self.pending.take()?;
        self.state = AuthState::Idle;

        let outcome = match self.mode {
            AuthMode::Login => AuthOutcome {
                mode: AuthMode::Login,
                email: request.email,
                message: "Login successful! Redirecting...".to_string(),
            },
            AuthMode::Register => {
                self.mode = AuthMode::Login;
                AuthOutcome {
                    mode: AuthMode::Register,
                    email: request.email,
                    message: "Account created successfully! You can now login.".to_string(),
                }
            }
        };

        Some(outcome)
    }
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request(name: &str, email: &str, password: &str, confirm: &str) -> AuthRequest {
        AuthRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    fn login_request(email: &str, password: &str) -> AuthRequest {
        register_request("", email, password, "")
    }

    #[test]
    fn test_invalid_email_reported_first() {
        let errors =
            AuthForm::validate(AuthMode::Login, &login_request("not-an-email", "short")).unwrap_err();

        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "Please enter a valid email address");
        assert_eq!(errors[1].field, "password");
    }

    #[test]
    fn test_email_pattern_rejects_spaces_and_missing_domain_dot() {
        for email in ["user@nodot", "user name@mail.com", "@mail.com", "user@.com "] {
            let errors =
                AuthForm::validate(AuthMode::Login, &login_request(email, "password123")).unwrap_err();
            assert_eq!(errors[0].field, "email", "expected {} to be rejected", email);
        }

        assert!(AuthForm::validate(
            AuthMode::Login,
            &login_request("guest@example.com", "password123")
        )
        .is_ok());
    }

    #[test]
    fn test_short_password_message() {
        let errors =
            AuthForm::validate(AuthMode::Login, &login_request("guest@example.com", "seven77"))
                .unwrap_err();

        assert_eq!(errors[0].message, "Password must be at least 8 characters long");
    }

    #[test]
    fn test_register_requires_matching_confirmation_and_name() {
        let errors = AuthForm::validate(
            AuthMode::Register,
            &register_request("A", "guest@example.com", "password123", "password124"),
        )
        .unwrap_err();

        assert_eq!(errors[0].field, "confirmPassword");
        assert_eq!(errors[0].message, "Passwords do not match");
        assert_eq!(errors[1].field, "name");
        assert_eq!(errors[1].message, "Please enter your name (minimum 2 characters)");
    }

    #[test]
    fn test_name_is_trimmed_before_length_check() {
        let errors = AuthForm::validate(
            AuthMode::Register,
            &register_request("  J  ", "guest@example.com", "password123", "password123"),
        )
        .unwrap_err();

        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn test_login_ignores_register_only_rules() {
        // Empty name and confirmation are fine in Login mode
        assert!(AuthForm::validate(
            AuthMode::Login,
            &login_request("guest@example.com", "password123")
        )
        .is_ok());
    }

    #[test]
    fn test_login_flow_reports_success() {
        let mut form = AuthForm::new();

        form.submit(login_request("guest@example.com", "password123"))
            .unwrap();
        assert_eq!(form.state(), AuthState::Submitting);

        let outcome = form.complete().unwrap();
        assert_eq!(outcome.message, "Login successful! Redirecting...");
        assert_eq!(form.mode(), AuthMode::Login);
        assert_eq!(form.state(), AuthState::Idle);
    }

    #[test]
    fn test_register_success_switches_back_to_login() {
        let mut form = AuthForm::with_mode(AuthMode::Register);

        form.submit(register_request(
            "Wanjiku",
            "wanjiku@example.com",
            "password123",
            "password123",
        ))
        .unwrap();

        let outcome = form.complete().unwrap();
        assert_eq!(outcome.mode, AuthMode::Register);
        assert_eq!(
            outcome.message,
            "Account created successfully! You can now login."
        );
        assert_eq!(form.mode(), AuthMode::Login);
    }

    #[test]
    fn test_failed_validation_keeps_form_idle() {
        let mut form = AuthForm::new();
        assert!(form.submit(login_request("bad", "short")).is_err());
        assert_eq!(form.state(), AuthState::Idle);
        assert!(form.complete().is_none());
    }

    #[test]
    fn test_toggle_mode_round_trips() {
        let mut form = AuthForm::new();
        form.toggle_mode();
        assert_eq!(form.mode(), AuthMode::Register);
        form.toggle_mode();
        assert_eq!(form.mode(), AuthMode::Login);
    }
}
