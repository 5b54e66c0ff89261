//! HTTP client for the EmailJS message-delivery API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client holds the fixed service, template and
//! key configuration and maps provider failures onto [`DeliveryError`].

mod async_wrapper;
pub use async_wrapper::{AsyncEmailJsClient, DeliveryProvider};

use crate::config::Config;
use crate::error::{DeliveryError, DeliveryResult};
use crate::metrics::Metrics;
use crate::models::TemplateParams;
use serde::Serialize;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Path of the EmailJS send endpoint.
pub const SEND_PATH: &str = "/api/v1.0/email/send";

/// Request body for `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
pub struct SendEmailRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    /// The account's public key
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
}

/// HTTP client for the EmailJS REST API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct EmailJsClient {
    /// Base URL for the EmailJS API
    base_url: String,

    service_id: String,
    template_id: String,
    public_key: String,
    private_key: Option<String>,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl EmailJsClient {
    /// Create a new EmailJsClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_url.clone(),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            private_key: config.private_key.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a client against a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, config: &Config) -> Self {
        let mut client = Self::new(config);
        client.base_url = base_url;
        client
    }

    /// Share an existing metrics collector with this client.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Build the JSON request body for a set of template parameters.
    pub fn build_request<'a>(&'a self, params: &'a TemplateParams) -> SendEmailRequest<'a> {
        SendEmailRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: params,
            access_token: self.private_key.as_deref(),
        }
    }

    /// Send one templated e-mail. Returns the provider's acknowledgement text.
    ///
    /// Exactly one HTTP request is made; there is no retry.
    pub fn send(&self, params: &TemplateParams) -> DeliveryResult<String> {
        let start = Instant::now();
        let url = self.build_url(SEND_PATH);
        let body = serde_json::to_value(self.build_request(params))?;

        tracing::debug!("POST {}", url);

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        self.metrics.record_http_request(duration);

        match result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                response.into_string().map_err(map_body_error)
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                self.metrics.record_http_error();
                Err(e)
            }
        }
    }

    /// Map a ureq error to a DeliveryError.
    fn map_error(&self, error: ureq::Error) -> DeliveryError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    400 => DeliveryError::InvalidRequest(message),
                    401 | 403 => DeliveryError::Unauthorized(message),
                    429 => DeliveryError::RateLimitExceeded,
                    _ => DeliveryError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    DeliveryError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io
                    && std::error::Error::source(&transport)
                        .and_then(|e| e.downcast_ref::<io::Error>())
                        .map_or(false, is_timeout)
                {
                    DeliveryError::Timeout
                } else {
                    DeliveryError::HttpError(transport.to_string())
                }
            }
        }
    }
}

/// Map a failure while reading the response body.
fn map_body_error(error: io::Error) -> DeliveryError {
    if is_timeout(&error) {
        DeliveryError::Timeout
    } else {
        DeliveryError::HttpError(error.to_string())
    }
}

fn is_timeout(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
    )
}
