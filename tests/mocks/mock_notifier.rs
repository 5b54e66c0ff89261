use jtech_contact::models::Notification;
use jtech_contact::Notifier;
use std::sync::{Arc, Mutex};

/// Notifier that keeps every notification for later assertions.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockNotifier {
    received: Arc<Mutex<Vec<Notification>>>,
}

#[allow(dead_code)]
impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<Notification> {
        self.received.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.received.lock().unwrap().last().cloned()
    }

    pub fn clear(&self) {
        self.received.lock().unwrap().clear();
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, notification: &Notification) {
        self.received.lock().unwrap().push(notification.clone());
    }
}
