//! Contact submission model and the payload sent to the delivery provider.

use crate::domain::{EmailAddress, FormField, IndianMobile, ValidationError};
use serde::{Deserialize, Serialize};

/// The transient record of one contact-form attempt.
///
/// Values are stored exactly as typed; validation only happens in [`validate`].
///
/// [`validate`]: ContactSubmission::validate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Read the raw value of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// Overwrite the raw value of a field.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    /// Clear every field back to an empty string.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when every field is an empty string.
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|field| self.get(*field).is_empty())
    }

    /// Validate all fields in form order, stopping at the first failure.
    ///
    /// Order: name, email, phone, subject, message. Text fields only need to be
    /// non-empty after trimming; the stored values are passed on untrimmed.
    pub fn validate(&self) -> Result<ValidatedSubmission, ValidationError> {
        let name = require_text(FormField::Name, &self.name)?;
        let email = EmailAddress::new(self.email.as_str())?;
        let phone = IndianMobile::new(self.phone.as_str())?;
        let subject = require_text(FormField::Subject, &self.subject)?;
        let message = require_text(FormField::Message, &self.message)?;

        Ok(ValidatedSubmission {
            name,
            email,
            phone,
            subject,
            message,
        })
    }
}

fn require_text(field: FormField, value: &str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(value.to_string())
}

/// A submission whose five fields all passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub phone: IndianMobile,
    pub subject: String,
    pub message: String,
}

impl ValidatedSubmission {
    /// Map onto the provider's template parameter names.
    pub fn template_params(&self) -> TemplateParams {
        TemplateParams {
            from_name: self.name.clone(),
            from_mail: self.email.as_str().to_string(),
            phone_number: self.phone.as_str().to_string(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

/// Template variables consumed by the e-mail template on the provider side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_mail: String,
    pub phone_number: String,
    pub subject: String,
    pub message: String,
}
