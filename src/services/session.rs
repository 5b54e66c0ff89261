//! Front-end submit gating.
//!
//! Plays the role of the page's disabled submit button: at most one send runs at
//! a time, and the in-flight send is always awaited before the session ends.

use crate::error::SubmitResult;
use crate::services::FormController;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::error;

/// Result of asking the session to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRequest {
    /// A send was started in the background.
    Started,
    /// A send is still in flight; nothing was started.
    Busy,
}

/// Owns the controller and the task of the send currently in flight.
pub struct FormSession {
    controller: Arc<FormController>,
    pending: Option<JoinHandle<SubmitResult<()>>>,
}

impl FormSession {
    pub fn new(controller: Arc<FormController>) -> Self {
        Self {
            controller,
            pending: None,
        }
    }

    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    /// True while a spawned send has not finished.
    ///
    /// Checked against the task itself; the controller's flag is only raised once
    /// the task gets polled.
    pub fn is_busy(&self) -> bool {
        self.pending
            .as_ref()
            .map_or(false, |handle| !handle.is_finished())
            || self.controller.is_submitting()
    }

    /// Spawn `submit` unless a send is already in flight.
    ///
    /// Must be called from within a tokio runtime.
    pub fn request_submit(&mut self) -> SubmitRequest {
        if self.is_busy() {
            return SubmitRequest::Busy;
        }

        let controller = self.controller.clone();
        self.pending = Some(tokio::spawn(async move { controller.submit().await }));
        SubmitRequest::Started
    }

    /// Wait for the in-flight send, if any, and return its outcome.
    ///
    /// The outcome has already been reported through the notifier.
    pub async fn finish(&mut self) -> Option<SubmitResult<()>> {
        let handle = self.pending.take()?;
        match handle.await {
            Ok(result) => Some(result),
            Err(e) => {
                error!("Submission task failed: {}", e);
                None
            }
        }
    }
}
