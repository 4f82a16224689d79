//! Per-call request context.

use std::thread;

use sentry::protocol::{Context, Map, Value};

/// Request metadata attached to a single report.
///
/// A `RequestContext` is passed to each reporting call and applies only to
/// the event produced by that call; nothing is stored in process-global
/// state, so concurrent reports from different threads cannot pick up one
/// another's request data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestContext {
    /// Identifier of the request being served.
    pub request_id: String,
    /// HTTP method of the request.
    pub method: String,
}

impl RequestContext {
    /// Creates a context for the given request.
    pub fn new(request_id: impl Into<String>, method: impl Into<String>) -> Self {
        RequestContext {
            request_id: request_id.into(),
            method: method.into(),
        }
    }

    /// Placeholder context for reports with no ambient request.
    pub fn server_default() -> Self {
        RequestContext::new("0", "none")
    }

    /// True if there is nothing worth attaching to an event.
    pub fn is_empty(&self) -> bool {
        self.request_id.is_empty() && self.method.is_empty()
    }

    /// Builds the `request` context payload sent with an event.
    ///
    /// The thread is recorded here rather than at construction time: the
    /// context may be built on a different thread than the one that ends
    /// up reporting.
    pub(crate) fn to_protocol(&self) -> Context {
        let mut map = Map::new();
        map.insert("type".into(), "request".into());
        map.insert("requestId".into(), Value::String(self.request_id.clone()));
        map.insert("method".into(), Value::String(self.method.clone()));
        map.insert(
            "thread".into(),
            Value::String(format!("{:?}", thread::current().id())),
        );
        Context::Other(map)
    }
}
