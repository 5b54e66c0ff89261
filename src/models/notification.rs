//! User-facing notifications raised by the contact form.

use crate::domain::{FormField, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

const VALIDATION_DURATION: Duration = Duration::from_millis(3000);
const RESULT_DURATION: Duration = Duration::from_millis(5000);

/// Severity tag shown with a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Success,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Success => write!(f, "success"),
        }
    }
}

/// A toast-style message for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    /// Auto-dismiss delay
    pub duration: Duration,
    pub closable: bool,
}

impl Notification {
    fn error(description: &str, duration: Duration) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.to_string(),
            severity: Severity::Error,
            duration,
            closable: true,
        }
    }

    /// Notification for a rejected field.
    pub fn for_validation(error: &ValidationError) -> Self {
        let description = match error {
            ValidationError::EmptyField(FormField::Name) => "Please enter your name",
            ValidationError::InvalidEmail(_) | ValidationError::EmptyField(FormField::Email) => {
                "Please enter a valid email address"
            }
            ValidationError::InvalidPhone(_) | ValidationError::EmptyField(FormField::Phone) => {
                "Please enter a valid Indian phone number"
            }
            ValidationError::EmptyField(FormField::Subject) => "Please enter a subject",
            ValidationError::EmptyField(FormField::Message) => "Please enter your message",
            ValidationError::UnknownField(_) => "This field is not part of the contact form",
        };
        Self::error(description, VALIDATION_DURATION)
    }

    /// Notification for a message the provider accepted.
    pub fn sent() -> Self {
        Self {
            title: "Success".to_string(),
            description: "Your message has been sent successfully!".to_string(),
            severity: Severity::Success,
            duration: RESULT_DURATION,
            closable: true,
        }
    }

    /// Notification for a failed provider call. Never carries provider detail.
    pub fn delivery_failed() -> Self {
        Self::error(
            "Failed to send message. Please try again later.",
            RESULT_DURATION,
        )
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
