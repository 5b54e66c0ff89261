//! IndianMobile value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ASCII classes only; `\d` in the regex crate also matches non-ASCII digits.
static INDIAN_MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("Failed to compile phone regex"));

/// Check for a 10-digit Indian mobile number whose first digit is 6, 7, 8 or 9.
///
/// Formatting characters, spaces and country prefixes are not accepted.
pub fn is_valid_indian_mobile(phone: &str) -> bool {
    INDIAN_MOBILE_REGEX.is_match(phone)
}

/// A type-safe wrapper for Indian mobile numbers.
///
/// # Example
///
/// ```
/// use jtech_contact::domain::IndianMobile;
///
/// let phone = IndianMobile::new("9876543210").unwrap();
/// assert_eq!(phone.as_str(), "9876543210");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndianMobile(String);

impl IndianMobile {
    /// Create a new IndianMobile, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number does not match.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !is_valid_indian_mobile(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for IndianMobile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IndianMobile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        IndianMobile::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for IndianMobile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
