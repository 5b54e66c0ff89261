use async_trait::async_trait;
use jtech_contact::error::{DeliveryError, DeliveryResult};
use jtech_contact::models::TemplateParams;
use jtech_contact::services::SubmittingFlag;
use jtech_contact::DeliveryProvider;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Mock delivery provider for testing.
///
/// Records every payload, optionally fails, optionally waits for a release
/// signal, and captures the controller's submitting flag as seen mid-call.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockDeliveryProvider {
    calls: Arc<Mutex<Vec<TemplateParams>>>,
    fail: bool,
    gate: Option<Arc<Notify>>,
    watched: Arc<Mutex<Option<SubmittingFlag>>>,
    seen_submitting: Arc<Mutex<Vec<bool>>>,
}

#[allow(dead_code)]
impl MockDeliveryProvider {
    pub fn succeeding() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: false,
            gate: None,
            watched: Arc::new(Mutex::new(None)),
            seen_submitting: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::succeeding()
        }
    }

    /// Block each call until `gate.notify_one()` is called.
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::succeeding()
        }
    }

    pub fn watch(&self, flag: SubmittingFlag) {
        *self.watched.lock().unwrap() = Some(flag);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<TemplateParams> {
        self.calls.lock().unwrap().clone()
    }

    pub fn seen_submitting(&self) -> Vec<bool> {
        self.seen_submitting.lock().unwrap().clone()
    }
}

#[async_trait]
impl DeliveryProvider for MockDeliveryProvider {
    async fn send(&self, params: &TemplateParams) -> DeliveryResult<()> {
        self.calls.lock().unwrap().push(params.clone());

        let flag = self.watched.lock().unwrap().clone();
        if let Some(flag) = flag {
            self.seen_submitting.lock().unwrap().push(flag.is_set());
        }

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.fail {
            return Err(DeliveryError::ApiError {
                status: 500,
                message: "mock provider outage".to_string(),
            });
        }
        Ok(())
    }
}
