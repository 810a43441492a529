//! Rendering an [`ExtendedError`] and applying its termination policy.
//!
//! The output sink and the termination strategy are owned by the
//! [`Handler`], so tests swap in a `Vec<u8>` and a [`RecordedExit`] instead
//! of touching the real process.
use std::io::{self, Write};

use tracing::{error, info, warn};

use crate::ExtendedError;

/// Prefix written before every handled error's message.
pub const BANNER: &str = "Error:\n  ";

/// `"Error:\n  <message>\n"`
pub fn render_banner(message: &str) -> String {
    format!("{BANNER}{message}\n")
}

/// How the process ends once an error has been rendered.
pub trait Terminate {
    fn terminate(&mut self, code: i32);
}

/// Ends the process with [`std::process::exit`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminate for ProcessExit {
    fn terminate(&mut self, code: i32) {
        std::process::exit(code)
    }
}

/// Records requested exit codes instead of exiting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedExit {
    codes: Vec<i32>,
}

impl RecordedExit {
    pub fn codes(&self) -> &[i32] {
        &self.codes
    }

    pub fn last(&self) -> Option<i32> {
        self.codes.last().copied()
    }

    pub fn count(&self) -> usize {
        self.codes.len()
    }
}

impl Terminate for RecordedExit {
    fn terminate(&mut self, code: i32) {
        self.codes.push(code);
    }
}

impl<F> Terminate for F
where
    F: FnMut(i32),
{
    fn terminate(&mut self, code: i32) {
        self(code)
    }
}

/// Renders errors to `W` and ends the process through `T`.
#[derive(Debug)]
pub struct Handler<W, T> {
    output: W,
    terminator: T,
}

impl Handler<io::Stdout, ProcessExit> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), ProcessExit)
    }
}

impl Default for Handler<io::Stdout, ProcessExit> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write, T: Terminate> Handler<W, T> {
    pub fn new(output: W, terminator: T) -> Self {
        Self { output, terminator }
    }

    /// Write the banner for `error`, then terminate with the exit code its
    /// severity selects.
    ///
    /// [`crate::Severity::Info`] returns control without terminating. A
    /// failed write is logged and does not stop the dispatch.
    pub fn handle(&mut self, error: ExtendedError) {
        let rendered = render_banner(&error.error_message());
        if let Err(e) = self
            .output
            .write_all(rendered.as_bytes())
            .and_then(|()| self.output.flush())
        {
            warn!(target: "severr::handler", error = %e, "failed to write error banner");
        }

        let severity = error.severity();
        match severity.exit_code() {
            Some(code) => {
                error!(target: "severr::handler", %severity, exit_code = code, error = %error, "terminating");
                self.terminator.terminate(code);
            }
            None => {
                info!(target: "severr::handler", %severity, error = %error, "continuing after error");
            }
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn terminator(&self) -> &T {
        &self.terminator
    }

    pub fn into_parts(self) -> (W, T) {
        (self.output, self.terminator)
    }
}
