//! Domain validation errors.

use super::field::FormField;
use std::fmt;

/// Errors that can occur while validating contact-form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace only.
    EmptyField(FormField),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is not a 10-digit Indian mobile number.
    InvalidPhone(String),

    /// The input name does not belong to the contact form.
    UnknownField(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{} cannot be empty", field.label()),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::UnknownField(name) => write!(f, "Unknown form field: {}", name),
        }
    }
}

impl std::error::Error for ValidationError {}
