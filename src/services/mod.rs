//! Application service layer.
//!
//! The form controller holds the contact-form business rules and sits between the
//! presentation layer (through [`Notifier`]) and the delivery provider. The session
//! gates submits the way the page's submit button does.

mod form_controller;
mod notifier;
mod session;

pub use form_controller::{FormController, SubmittingFlag};
pub use notifier::{Notifier, TracingNotifier};
pub use session::{FormSession, SubmitRequest};
