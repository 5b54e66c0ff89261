//! Behavioural tests for the contact form controller against mock collaborators.

mod mocks;

use jtech_contact::models::{ContactSubmission, Notification, Severity};
use jtech_contact::{FormController, FormField, SubmitError, ValidationError};
use mocks::{MockDeliveryProvider, MockNotifier};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

fn controller_with(provider: &MockDeliveryProvider, notifier: &MockNotifier) -> FormController {
    let controller = FormController::new(Arc::new(provider.clone()), Arc::new(notifier.clone()));
    provider.watch(controller.submitting_flag());
    controller
}

fn fill_valid(controller: &FormController) {
    controller.update_field(FormField::Name, "Priya Sharma");
    controller.update_field(FormField::Email, "priya@example.com");
    controller.update_field(FormField::Phone, "9876543210");
    controller.update_field(FormField::Subject, "CCTV for villa");
    controller.update_field(FormField::Message, "Please quote for 8 outdoor cameras.");
}

#[tokio::test]
async fn test_empty_text_fields_block_delivery() {
    let cases = [
        (FormField::Name, "Please enter your name"),
        (FormField::Subject, "Please enter a subject"),
        (FormField::Message, "Please enter your message"),
    ];

    for (field, description) in cases {
        for blank in ["", "   ", "\t\n"] {
            let provider = MockDeliveryProvider::succeeding();
            let notifier = MockNotifier::new();
            let controller = controller_with(&provider, &notifier);
            fill_valid(&controller);
            controller.update_field(field, blank);

            let err = controller.submit().await.unwrap_err();

            match err {
                SubmitError::Validation(ValidationError::EmptyField(f)) => assert_eq!(f, field),
                other => panic!("Expected EmptyField({:?}), got {:?}", field, other),
            }
            assert_eq!(provider.call_count(), 0);
            assert!(!controller.is_submitting());

            let received = notifier.received();
            assert_eq!(received.len(), 1);
            assert_eq!(received[0].description, description);
            assert_eq!(received[0].severity, Severity::Error);
        }
    }
}

#[tokio::test]
async fn test_invalid_email_blocks_delivery() {
    let provider = MockDeliveryProvider::succeeding();
    let notifier = MockNotifier::new();
    let controller = controller_with(&provider, &notifier);
    fill_valid(&controller);
    controller.update_field(FormField::Email, "a@b");

    let err = controller.submit().await.unwrap_err();

    assert!(matches!(
        err,
        SubmitError::Validation(ValidationError::InvalidEmail(_))
    ));
    assert_eq!(provider.call_count(), 0);
    assert_eq!(
        notifier.last().unwrap().description,
        "Please enter a valid email address"
    );
}

#[tokio::test]
async fn test_invalid_phone_blocks_delivery() {
    for phone in ["1234567890", "98765432", "98765432101", ""] {
        let provider = MockDeliveryProvider::succeeding();
        let notifier = MockNotifier::new();
        let controller = controller_with(&provider, &notifier);
        fill_valid(&controller);
        controller.update_field(FormField::Phone, phone);

        let err = controller.submit().await.unwrap_err();

        assert!(
            matches!(err, SubmitError::Validation(ValidationError::InvalidPhone(_))),
            "{} should be rejected",
            phone
        );
        assert_eq!(provider.call_count(), 0);
        assert_eq!(
            notifier.last().unwrap().description,
            "Please enter a valid Indian phone number"
        );
    }
}

#[tokio::test]
async fn test_first_failure_wins() {
    let provider = MockDeliveryProvider::succeeding();
    let notifier = MockNotifier::new();
    let controller = controller_with(&provider, &notifier);

    // Bad email, bad phone and empty message; email is checked first
    controller.update_field(FormField::Name, "Priya");
    controller.update_field(FormField::Email, "not-an-email");
    controller.update_field(FormField::Phone, "123");
    controller.update_field(FormField::Subject, "Hi");

    let err = controller.submit().await.unwrap_err();

    assert!(matches!(
        err,
        SubmitError::Validation(ValidationError::InvalidEmail(_))
    ));
    assert_eq!(notifier.received().len(), 1);
}

#[tokio::test]
async fn test_valid_submission_delivers_once_and_resets() {
    let provider = MockDeliveryProvider::succeeding();
    let notifier = MockNotifier::new();
    let controller = controller_with(&provider, &notifier);
    fill_valid(&controller);

    controller.submit().await.unwrap();

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].from_name, "Priya Sharma");
    assert_eq!(calls[0].from_mail, "priya@example.com");
    assert_eq!(calls[0].phone_number, "9876543210");
    assert_eq!(calls[0].subject, "CCTV for villa");
    assert_eq!(calls[0].message, "Please quote for 8 outdoor cameras.");

    assert_eq!(provider.seen_submitting(), vec![true]);
    assert!(!controller.is_submitting());
    assert_eq!(controller.snapshot(), ContactSubmission::default());

    let received = notifier.received();
    assert_eq!(received, vec![Notification::sent()]);
    assert_eq!(received[0].duration, Duration::from_millis(5000));
}

#[tokio::test]
async fn test_delivery_failure_preserves_input() {
    let provider = MockDeliveryProvider::failing();
    let notifier = MockNotifier::new();
    let controller = controller_with(&provider, &notifier);
    fill_valid(&controller);
    let before = controller.snapshot();

    let err = controller.submit().await.unwrap_err();

    assert!(err.is_delivery());
    assert_eq!(provider.call_count(), 1);
    assert_eq!(provider.seen_submitting(), vec![true]);
    assert!(!controller.is_submitting());
    assert_eq!(controller.snapshot(), before);

    let last = notifier.last().unwrap();
    assert_eq!(last, Notification::delivery_failed());
    assert!(!last.description.contains("mock provider outage"));
    assert_eq!(controller.metrics().submissions_failed_total(), 1);
}

#[tokio::test]
async fn test_form_usable_after_failure() {
    let provider = MockDeliveryProvider::failing();
    let notifier = MockNotifier::new();
    let controller = controller_with(&provider, &notifier);
    fill_valid(&controller);

    assert!(controller.submit().await.is_err());
    assert!(controller.submit().await.is_err());

    // No automatic retry: one provider call per submit
    assert_eq!(provider.call_count(), 2);
    assert_eq!(notifier.received().len(), 2);
}

#[tokio::test]
async fn test_submitting_flag_visible_while_in_flight() {
    let gate = Arc::new(Notify::new());
    let provider = MockDeliveryProvider::gated(gate.clone());
    let notifier = MockNotifier::new();
    let controller = Arc::new(controller_with(&provider, &notifier));
    fill_valid(&controller);
    let flag = controller.submitting_flag();

    let task = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.submit().await })
    };

    while provider.call_count() == 0 {
        tokio::task::yield_now().await;
    }
    assert!(flag.is_set());
    assert!(controller.is_submitting());

    gate.notify_one();
    task.await.unwrap().unwrap();

    assert!(!flag.is_set());
    assert!(controller.snapshot().is_empty());
}

#[tokio::test]
async fn test_update_field_idempotent() {
    let provider = MockDeliveryProvider::succeeding();
    let notifier = MockNotifier::new();

    let once = controller_with(&provider, &notifier);
    once.update_field(FormField::Email, "x@y.in");

    let twice = controller_with(&provider, &notifier);
    twice.update_field(FormField::Email, "x@y.in");
    twice.update_field(FormField::Email, "x@y.in");

    assert_eq!(once.snapshot(), twice.snapshot());
    assert!(notifier.received().is_empty());
}

#[tokio::test]
async fn test_update_field_by_input_name() {
    let provider = MockDeliveryProvider::succeeding();
    let notifier = MockNotifier::new();
    let controller = controller_with(&provider, &notifier);

    for (name, value) in [
        ("name", "Priya Sharma"),
        ("email", "priya@example.com"),
        ("phone", "9876543210"),
        ("subject", "Access control"),
        ("message", "Biometric door lock"),
    ] {
        controller.update_field_by_name(name, value).unwrap();
    }

    assert!(controller.update_field_by_name("whatsapp", "1").is_err());

    controller.submit().await.unwrap();
    assert_eq!(provider.call_count(), 1);
}
