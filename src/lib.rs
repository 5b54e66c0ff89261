//! J Technologies contact form - the submission workflow behind the site's contact page.
//!
//! The library validates a visitor's contact request and delivers it through the
//! EmailJS REST API. Notifications for the visitor go to a pluggable [`Notifier`].
//!
//! # Architecture
//!
//! - **domain**: Field names and validated value objects (email, Indian mobile)
//! - **models**: The submission record, provider payload and notifications
//! - **error**: Error types for delivery, configuration and submission
//! - **config**: Configuration management from environment variables
//! - **client**: EmailJS HTTP client and the async `DeliveryProvider` seam
//! - **services**: The form controller and the notifier boundary
//! - **metrics**: Request and submission counters

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod services;

pub use client::{AsyncEmailJsClient, DeliveryProvider, EmailJsClient};
pub use config::Config;
pub use domain::{is_valid_email, is_valid_indian_mobile, FormField, ValidationError};
pub use error::{ConfigError, DeliveryError, SubmitError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{ContactSubmission, Notification, Severity, TemplateParams};
pub use services::{
    FormController, FormSession, Notifier, SubmitRequest, SubmittingFlag, TracingNotifier,
};
