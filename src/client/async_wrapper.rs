//! Async delivery seam and the blocking-pool wrapper around `EmailJsClient`.
//!
//! The form controller only sees [`DeliveryProvider`]. The production
//! implementation runs the synchronous `ureq` client on tokio's blocking pool
//! so the async runtime is never stalled by the HTTP call.

use crate::client::EmailJsClient;
use crate::error::{DeliveryError, DeliveryResult};
use crate::models::TemplateParams;
use async_trait::async_trait;
use std::sync::Arc;

/// Something that can deliver one contact-form message.
///
/// Implementations carry their own destination and credentials; callers only
/// supply the template parameters.
#[async_trait]
pub trait DeliveryProvider: Send + Sync {
    async fn send(&self, params: &TemplateParams) -> DeliveryResult<()>;
}

/// Async wrapper around synchronous EmailJsClient.
#[derive(Clone)]
pub struct AsyncEmailJsClient {
    client: Arc<EmailJsClient>,
}

impl AsyncEmailJsClient {
    pub fn new(client: EmailJsClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn inner(&self) -> &EmailJsClient {
        &self.client
    }
}

#[async_trait]
impl DeliveryProvider for AsyncEmailJsClient {
    async fn send(&self, params: &TemplateParams) -> DeliveryResult<()> {
        let client = self.client.clone();
        let params = params.clone();

        let ack = tokio::task::spawn_blocking(move || client.send(&params))
            .await
            .map_err(|e| DeliveryError::HttpError(format!("Task join error: {}", e)))??;

        tracing::debug!("Provider acknowledged delivery: {}", ack.trim());
        Ok(())
    }
}
