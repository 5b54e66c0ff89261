//! Domain value objects and types.
//!
//! This module contains the contact form's field names and the type-safe wrappers
//! for the two formatted inputs (email address and Indian mobile number). Value
//! objects validate at construction time so invalid data cannot reach the
//! delivery layer.

pub mod email;
pub mod errors;
pub mod field;
pub mod phone;

pub use email::{is_valid_email, EmailAddress};
pub use errors::ValidationError;
pub use field::FormField;
pub use phone::{is_valid_indian_mobile, IndianMobile};
