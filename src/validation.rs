// Form validation vocabulary shared by the booking and auth forms
// Failures are data, not errors: each failed condition becomes one
// ValidationError keyed to the field that failed

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub context: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>, context: &str) -> Self {
        ValidationError {
            field: field.to_string(),
            message: message.into(),
            context: context.to_string(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.context, self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), Vec<ValidationError>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context_and_field() {
        let err = ValidationError::new("email", "Please enter a valid email address", "Auth");
        assert_eq!(
            err.to_string(),
            "[Auth] email: Please enter a valid email address"
        );
    }
}
