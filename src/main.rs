//! J Technologies contact form - line-oriented front end.
//!
//! Reads form edits from stdin and prints notifications to stdout. Logs go to
//! stderr. Commands:
//!
//! - `<field>=<value>` or `<field>: <value>` updates a field
//! - `submit` sends the form (ignored while a send is in flight)
//! - `show` prints the current values
//! - `quit` exits (EOF does too, after any pending send finishes)

use anyhow::Result;
use jtech_contact::{
    AsyncEmailJsClient, Config, DeliveryProvider, EmailJsClient, FormController, FormField,
    FormSession, Metrics, Notification, Notifier, SubmitRequest, TracingNotifier,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Prints notifications the way the page would toast them, and logs them.
struct StdoutNotifier {
    log: TracingNotifier,
}

impl Notifier for StdoutNotifier {
    fn notify(&self, notification: &Notification) {
        self.log.notify(notification);
        println!(
            "[{}] {}: {}",
            notification.severity, notification.title, notification.description
        );
    }
}

enum Command<'a> {
    Update(&'a str, &'a str),
    Submit,
    Show,
    Quit,
    Blank,
}

fn parse_command(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    match trimmed {
        "" => Command::Blank,
        "submit" => Command::Submit,
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        _ => match line.split_once('=').or_else(|| line.split_once(':')) {
            Some((field, value)) => Command::Update(field.trim(), value.trim_start()),
            None => Command::Update(trimmed, ""),
        },
    }
}

fn print_form(controller: &FormController) {
    let submission = controller.snapshot();
    for field in FormField::ALL {
        println!("{:>12}: {}", field.label(), submission.get(field));
    }
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Delivering through EmailJS at {}", config.api_url);

    let metrics = Metrics::new();
    let client = EmailJsClient::new(&config).with_metrics(metrics.clone());
    let provider = Arc::new(AsyncEmailJsClient::new(client)) as Arc<dyn DeliveryProvider>;
    let notifier = Arc::new(StdoutNotifier {
        log: TracingNotifier,
    });
    let controller =
        Arc::new(FormController::new(provider, notifier).with_metrics(metrics.clone()));
    let mut session = FormSession::new(controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Command::Blank => {}
            Command::Quit => break,
            Command::Show => print_form(session.controller()),
            Command::Submit => {
                if session.request_submit() == SubmitRequest::Busy {
                    println!("Sending... please wait");
                }
            }
            Command::Update(name, value) => {
                if let Err(e) = session.controller().update_field_by_name(name, value) {
                    println!("{}", e);
                }
            }
        }
    }

    // Outcome was already reported through the notifier
    let _ = session.finish().await;

    info!("Session metrics: {}", metrics.summary());
    Ok(())
}
