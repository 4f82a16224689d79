//! Client configuration.

use std::borrow::Cow;
use std::env;

use sentry::types::Dsn;
use sentry::{ClientInitGuard, ClientOptions};

/// Where the client sends events and how it identifies this build.
///
/// Values come from the environment (`SENTRY_DSN`, `SENTRY_ENVIRONMENT`,
/// `SENTRY_RELEASE`, `SENTRY_DEBUG`); nothing is baked into the binary.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Ingestion endpoint, including the key. `None` disables submission.
    pub dsn: Option<String>,
    /// Environment tag attached to every event.
    pub environment: String,
    /// Release identifier, `name@version` of this crate by default.
    pub release: Option<Cow<'static, str>>,
    /// Enables the client's own diagnostic output.
    pub debug: bool,
}

impl ReportConfig {
    /// Reads the configuration from the environment.
    pub fn from_env() -> Self {
        ReportConfig {
            dsn: env::var("SENTRY_DSN").ok(),
            environment: env::var("SENTRY_ENVIRONMENT").unwrap_or_else(|_| "dev".into()),
            release: env::var("SENTRY_RELEASE")
                .ok()
                .map(Cow::Owned)
                .or_else(|| sentry::release_name!()),
            debug: env::var("SENTRY_DEBUG")
                .as_deref()
                .map(parse_flag)
                .unwrap_or(false),
        }
    }

    /// Initializes the client.
    ///
    /// Events are flushed when the returned guard drops, so keep it alive
    /// for the lifetime of the process. With no usable DSN the client is
    /// initialized disabled and every report returns
    /// [`ReportError::Discarded`](crate::ReportError::Discarded).
    pub fn init(self) -> ClientInitGuard {
        let dsn = self.dsn.and_then(|raw| match raw.parse::<Dsn>() {
            Ok(dsn) => Some(dsn),
            Err(err) => {
                log::warn!("invalid SENTRY_DSN, reports will be discarded: {err}");
                None
            }
        });
        log::debug!(
            "initializing client for environment {:?}, release {:?}",
            self.environment,
            self.release
        );
        sentry::init(ClientOptions {
            dsn,
            environment: Some(self.environment.into()),
            release: self.release,
            debug: self.debug,
            ..Default::default()
        })
    }
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
