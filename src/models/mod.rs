//! Data models for the contact form.
//!
//! This module contains the submission record, the provider payload built from it,
//! and the notifications shown to the visitor.

pub mod notification;
pub mod submission;

pub use notification::{Notification, Severity};
pub use submission::{ContactSubmission, TemplateParams, ValidatedSubmission};
