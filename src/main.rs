//! Demonstration binary: initializes the client from the environment,
//! reports one synthetic server error, emits one informational event and
//! shuts down.

use sentry::protocol::{Event, Level};
use server_report::{capture_server_exception, ReportConfig};

/// The failure the demo manufactures and reports.
#[derive(Debug, thiserror::Error)]
#[error("This is an error!")]
struct DemoError;

fn failing_step() -> Result<(), DemoError> {
    Err(DemoError)
}

fn main() {
    pretty_env_logger::init();

    let config = ReportConfig::from_env();
    if config.dsn.is_none() {
        log::warn!("SENTRY_DSN is not set, reports will be discarded");
    }
    let _guard = config.init();

    if let Err(err) = failing_step() {
        if let Err(report_err) = capture_server_exception!(&err) {
            log::warn!("could not report the error: {report_err}");
        }
        eprintln!("Caught an exception: {err}");
    }

    sentry::capture_event(Event {
        level: Level::Info,
        logger: Some("custom".into()),
        message: Some("It works!".into()),
        ..Default::default()
    });

    // Dropping the guard flushes pending events and closes the client.
}
