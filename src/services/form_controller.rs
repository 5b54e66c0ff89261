//! Contact form controller.
//!
//! Owns the field state, validates on submit and drives the single outbound call
//! to the delivery provider.

use crate::client::DeliveryProvider;
use crate::domain::{FormField, ValidationError};
use crate::error::{SubmitError, SubmitResult};
use crate::metrics::Metrics;
use crate::models::{ContactSubmission, Notification};
use crate::services::Notifier;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

/// Read-only view of the controller's "submitting" state.
///
/// Cloning is cheap; every clone observes the same flag.
#[derive(Debug, Clone, Default)]
pub struct SubmittingFlag(Arc<AtomicBool>);

impl SubmittingFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn raise(&self) -> SubmittingGuard<'_> {
        self.0.store(true, Ordering::SeqCst);
        SubmittingGuard(self)
    }
}

/// Lowers the flag when the provider call finishes or the submit future is dropped.
struct SubmittingGuard<'a>(&'a SubmittingFlag);

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0 .0.store(false, Ordering::SeqCst);
    }
}

/// Collects, validates and submits one contact form.
pub struct FormController {
    provider: Arc<dyn DeliveryProvider>,
    notifier: Arc<dyn Notifier>,
    submission: Mutex<ContactSubmission>,
    submitting: SubmittingFlag,
    metrics: Metrics,
}

impl FormController {
    /// Create a controller with an empty form.
    pub fn new(provider: Arc<dyn DeliveryProvider>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            provider,
            notifier,
            submission: Mutex::new(ContactSubmission::default()),
            submitting: SubmittingFlag::default(),
            metrics: Metrics::new(),
        }
    }

    /// Share an existing metrics collector with this controller.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn lock_submission(&self) -> MutexGuard<'_, ContactSubmission> {
        // A panic elsewhere cannot leave a half-written String, so poisoning is ignored
        self.submission
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Store a raw field value. No validation happens here.
    pub fn update_field(&self, field: FormField, value: impl Into<String>) {
        self.lock_submission().set(field, value);
    }

    /// Store a raw field value addressed by its input name (`"email"`, `"phone"`, ...).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::UnknownField` if the name is not a form input.
    pub fn update_field_by_name(
        &self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<FormField, ValidationError> {
        let field: FormField = name.parse()?;
        self.update_field(field, value);
        Ok(field)
    }

    /// A copy of the current field values.
    pub fn snapshot(&self) -> ContactSubmission {
        self.lock_submission().clone()
    }

    /// Whether a provider call is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting.is_set()
    }

    /// Handle for the presentation layer to disable its submit action.
    pub fn submitting_flag(&self) -> SubmittingFlag {
        self.submitting.clone()
    }

    /// Validate the form and, if every field passes, send it.
    ///
    /// Validation failures notify and return without touching the network or the
    /// submitting flag. A delivery failure keeps the typed values so the visitor can
    /// resubmit. Concurrent calls are not rejected here.
    pub async fn submit(&self) -> SubmitResult<()> {
        let validated = self.lock_submission().validate();
        let validated = match validated {
            Ok(validated) => validated,
            Err(err) => {
                debug!("Contact form rejected: {}", err);
                self.metrics.record_validation_failure();
                self.notifier.notify(&Notification::for_validation(&err));
                return Err(SubmitError::Validation(err));
            }
        };

        let params = validated.template_params();
        let _guard = self.submitting.raise();

        match self.provider.send(&params).await {
            Ok(()) => {
                info!("Contact message delivered");
                self.metrics.record_submission_sent();
                self.notifier.notify(&Notification::sent());
                self.lock_submission().reset();
                Ok(())
            }
            Err(err) => {
                error!("Error sending message: {}", err);
                warn!("Keeping form values for manual resubmission");
                self.metrics.record_submission_failed();
                self.notifier.notify(&Notification::delivery_failed());
                Err(SubmitError::Delivery(err))
            }
        }
    }
}
