//! Contact form and the login/sign-up placeholders
//!
//! These forms only validate their input. Nothing is sent anywhere and no
//! account is created.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

/// Form validation failures
#[derive(Debug, Error)]
pub enum FormError {
    /// One or more fields failed their validation rules
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
    /// Sign-up password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl FormError {
    /// Names of the fields that failed validation, sorted
    #[must_use]
    pub fn fields(&self) -> Vec<String> {
        match self {
            Self::Invalid(errors) => {
                let mut fields: Vec<String> = errors
                    .field_errors()
                    .keys()
                    .map(ToString::to_string)
                    .collect();
                fields.sort();
                fields
            }
            Self::PasswordMismatch => vec!["confirm_password".to_string()],
        }
    }
}

/// Digits in a phone number, not counting a leading `+`
const PHONE_DIGITS: usize = 10;

/// Accepts exactly 10 digits with an optional leading `+`
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let trimmed = phone.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.len() == PHONE_DIGITS && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

/// Message sent from the contact screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    /// Sender's name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Sender's email address
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    /// Sender's phone number
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
    /// Message body
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

impl ContactForm {
    /// Validate every field
    ///
    /// # Errors
    /// Returns [`FormError::Invalid`] listing each failing field.
    pub fn check(&self) -> Result<(), FormError> {
        self.validate()?;
        Ok(())
    }
}

/// Login placeholder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    /// Account email
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    /// Account password
    #[validate(length(min = 6, message = "Password is too short"))]
    pub password: String,
}

impl LoginForm {
    /// Validate every field
    ///
    /// # Errors
    /// Returns [`FormError::Invalid`] listing each failing field.
    pub fn check(&self) -> Result<(), FormError> {
        self.validate()?;
        Ok(())
    }
}

/// Sign-up placeholder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SignupForm {
    /// Full name
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Account email
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    /// Chosen password
    #[validate(length(min = 6, message = "Password is too short"))]
    pub password: String,
    /// Password typed a second time
    pub confirm_password: String,
}

impl SignupForm {
    /// Validate every field, then the password confirmation
    ///
    /// # Errors
    /// Returns [`FormError::Invalid`] for field failures, or
    /// [`FormError::PasswordMismatch`] when the confirmation differs.
    pub fn check(&self) -> Result<(), FormError> {
        self.validate()?;
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactForm {
        ContactForm {
            name: "Thandi".to_string(),
            email: "thandi@example.com".to_string(),
            phone: "+0821234567".to_string(),
            message: "When does the next sewing class start?".to_string(),
        }
    }

    #[test]
    fn test_valid_contact_form() {
        assert!(contact().check().is_ok());
    }

    #[test]
    fn test_contact_form_reports_every_field() {
        let err = ContactForm::default().check().unwrap_err();
        assert_eq!(err.fields(), vec!["email", "message", "name", "phone"]);
    }

    #[test]
    fn test_bad_email() {
        let mut form = contact();
        form.email = "not-an-email".to_string();
        assert_eq!(form.check().unwrap_err().fields(), vec!["email"]);
    }

    #[test]
    fn test_phone_rules() {
        assert!(validate_phone("0821234567").is_ok());
        assert!(validate_phone("+0821234567").is_ok());
        assert!(validate_phone("082-123-4567").is_err());
        assert!(validate_phone("+27821234567").is_err());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("082abc4567").is_err());
        assert!(validate_phone("++0821234567").is_err());
    }

    #[test]
    fn test_login_form() {
        let form = LoginForm {
            email: "a@b.co".to_string(),
            password: "secret".to_string(),
        };
        assert!(form.check().is_ok());
        assert!(LoginForm::default().check().is_err());

        let short = LoginForm {
            password: "abc".to_string(),
            ..form
        };
        assert_eq!(short.check().unwrap_err().fields(), vec!["password"]);
    }

    #[test]
    fn test_signup_password_rules() {
        let mut form = SignupForm {
            name: "Sipho".to_string(),
            email: "sipho@example.com".to_string(),
            password: "abcdef".to_string(),
            confirm_password: "abcdef".to_string(),
        };
        assert!(form.check().is_ok());

        form.confirm_password = "abcdeg".to_string();
        assert!(matches!(form.check(), Err(FormError::PasswordMismatch)));

        form.password = "abc".to_string();
        assert_eq!(form.check().unwrap_err().fields(), vec!["password"]);
    }
}
