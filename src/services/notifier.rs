//! Presentation boundary for contact-form notifications.

use crate::models::{Notification, Severity};

/// Receives the toasts the form controller wants shown to the visitor.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Notifier that writes every notification to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.severity {
            Severity::Success => tracing::info!(
                title = %notification.title,
                duration_ms = notification.duration.as_millis() as u64,
                "{}",
                notification.description
            ),
            Severity::Error => tracing::warn!(
                title = %notification.title,
                duration_ms = notification.duration.as_millis() as u64,
                "{}",
                notification.description
            ),
        }
    }
}
