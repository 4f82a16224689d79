//! Request-scoped error reporting for server code on top of the [`sentry`]
//! client.
//!
//! Reports are classified with a type string, labeled with the call site
//! they were captured at (`file:function:line`), and optionally tied to the
//! request they occurred in. The request data travels with each individual
//! report instead of living in process-global state, so reports from
//! concurrent threads can never pick up one another's request context.
//!
//! Transport, batching and delivery all belong to the underlying client; a
//! successful report only means the client accepted the event.
//!
//! # Example
//!
//! ```rust,no_run
//! use server_report::{call_site, capture_error_with_context, ReportConfig, RequestContext};
//!
//! let _guard = ReportConfig::from_env().init();
//!
//! let request = RequestContext::new("req-42", "GET");
//! if let Err(err) = capture_error_with_context(
//!     "ServerError",
//!     "upstream returned garbage",
//!     call_site!(),
//!     &request,
//! ) {
//!     log::warn!("could not report: {err}");
//! }
//! ```

#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod callsite;
pub mod config;
pub mod context;
pub mod reporter;

pub use crate::callsite::{basename, CallSite};
pub use crate::config::ReportConfig;
pub use crate::context::RequestContext;
pub use crate::reporter::{
    capture_error, capture_error_with_context, capture_server_exception, send_error, ReportError,
};
