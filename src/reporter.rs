//! Event construction and submission.

use std::error::Error;

use sentry::integrations::backtrace::current_stacktrace;
use sentry::protocol::{Event, Exception, Level};
use sentry::types::Uuid;

use crate::callsite::CallSite;
use crate::context::RequestContext;

/// The ways handing a report to the client can fail.
///
/// Submission is fire-and-forget; the one failure observable from here is
/// the client refusing the event instead of accepting it for delivery.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// No client is bound to the current hub, or the client dropped the
    /// event before queueing it.
    #[error("the report was discarded by the client")]
    Discarded,
}

/// Builds one error event and submits it to the current hub.
///
/// The event carries the classification and message under
/// `exception.values`, the transaction label, and a stacktrace of the
/// submitting thread. Delivery happens in the background; `Ok` only means
/// the client accepted the event.
pub fn send_error(
    error_type: &str,
    message: &str,
    transaction: &str,
) -> Result<Uuid, ReportError> {
    let event = Event {
        level: Level::Error,
        transaction: Some(transaction.to_owned()),
        exception: vec![Exception {
            ty: error_type.to_owned(),
            value: Some(message.to_owned()),
            stacktrace: current_stacktrace(),
            ..Default::default()
        }]
        .into(),
        ..Default::default()
    };

    let id = sentry::capture_event(event);
    if id.is_nil() {
        Err(ReportError::Discarded)
    } else {
        Ok(id)
    }
}

/// Reports an error captured at `site`.
///
/// One line is also written to standard error so the report is visible
/// locally: `error: <file>:<function>:<line>: <message>`.
pub fn capture_error(
    error_type: &str,
    message: &str,
    site: CallSite,
) -> Result<Uuid, ReportError> {
    let transaction = site.transaction();
    eprintln!("error: {transaction}: {message}");
    send_error(error_type, message, &transaction)
}

/// Reports an error together with the request it occurred in.
///
/// The request data is attached as a `request` context on a scope pushed
/// for this call only, so it never outlives the report and concurrent
/// reports from other threads keep their own context. A context with
/// neither request id nor method is not attached at all.
pub fn capture_error_with_context(
    error_type: &str,
    message: &str,
    site: CallSite,
    request: &RequestContext,
) -> Result<Uuid, ReportError> {
    sentry::with_scope(
        |scope| {
            if !request.is_empty() {
                scope.set_context("request", request.to_protocol());
            }
        },
        || capture_error(error_type, message, site),
    )
}

/// Reports a server-side failure with a placeholder request context.
///
/// The error is classified as `ServerError` and the message is prefixed
/// with `Server exception thrown: `. Call sites that do have an ambient
/// request should use [`capture_error_with_context`] instead.
pub fn capture_server_exception<E>(error: &E, site: CallSite) -> Result<Uuid, ReportError>
where
    E: Error + ?Sized,
{
    let message = format!("Server exception thrown: {error}");
    capture_error_with_context(
        "ServerError",
        &message,
        site,
        &RequestContext::server_default(),
    )
}
