//! Where a severity-tagged error goes once a caller is done with it.
//!
//! [`crate::Handler`] is the terminal policy: it prints the banner and may
//! end the process. Other policies route the same error elsewhere without
//! terminating.
//!
//! Example
//! ```rust,ignore
//! use severr::{ErrorPolicy, ExtendedError, TracingPolicy, Severity};
//!
//! let mut policy = TracingPolicy;
//! policy.emit(ExtendedError::new("error adding labels to the PR", Severity::Info)?);
//! ```
use std::io::Write;

use crate::handler::{Handler, Terminate};
use crate::{ExtendedError, Severity};

pub trait ErrorPolicy {
    /// Consume the error according to the policy (print and exit, log, drop).
    fn emit(&mut self, error: ExtendedError);
}

impl<W: Write, T: Terminate> ErrorPolicy for Handler<W, T> {
    fn emit(&mut self, error: ExtendedError) {
        self.handle(error);
    }
}

/// A policy that drops every error.
#[derive(Debug, Clone, Default)]
pub struct NoopPolicy;

impl ErrorPolicy for NoopPolicy {
    fn emit(&mut self, _error: ExtendedError) {}
}

/// Reports the error as a `tracing` event and never terminates.
///
/// `Info` maps to `WARN`, every other severity to `ERROR`.
#[derive(Debug, Clone, Default)]
pub struct TracingPolicy;

impl ErrorPolicy for TracingPolicy {
    fn emit(&mut self, error: ExtendedError) {
        use tracing::{Level, event};

        let severity = error.severity();
        match severity {
            Severity::Info => {
                event!(target: "severr::policy", Level::WARN, %severity, error = %error)
            }
            Severity::Severe | Severity::High | Severity::Low => {
                event!(target: "severr::policy", Level::ERROR, %severity, error = %error)
            }
        }
    }
}
