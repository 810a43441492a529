use std::error::Error as StdError;
use std::fmt;
use std::io::Write;

use crate::handler::{Handler, Terminate};
use crate::{BoxError, Error, Result, Severity};

/// An error paired with the [`Severity`] that decides how it terminates the
/// process.
///
/// Rendering never walks the causal chain: [`ExtendedError::error_message`]
/// is exactly the underlying error's `Display` output. Use
/// [`crate::wrap_error`] to fold context into that text.
#[derive(Debug)]
pub struct ExtendedError {
    inner: BoxError,
    severity: Severity,
}

impl ExtendedError {
    /// Attach `severity` to `err`.
    ///
    /// Accepts anything convertible into a boxed error, including plain
    /// `&str` and `String` messages. An error that renders an empty message
    /// is rejected with [`Error::InvalidError`].
    pub fn new<E>(err: E, severity: Severity) -> Result<Self>
    where
        E: Into<BoxError>,
    {
        let inner = err.into();
        if inner.to_string().is_empty() {
            return Err(Error::InvalidError(
                "underlying error renders an empty message".to_string(),
            ));
        }
        Ok(Self { inner, severity })
    }

    /// Like [`ExtendedError::new`], rejecting a missing error.
    pub fn from_option<E>(err: Option<E>, severity: Severity) -> Result<Self>
    where
        E: Into<BoxError>,
    {
        match err {
            Some(err) => Self::new(err, severity),
            None => Err(Error::InvalidError("no underlying error given".to_string())),
        }
    }

    // The rejection itself carries a non-empty message, so it can stand in
    // for the missing error.
    pub(crate) fn from_rejected(rejected: Error, severity: Severity) -> Self {
        Self {
            inner: Box::new(rejected),
            severity,
        }
    }

    pub fn error_message(&self) -> String {
        self.inner.to_string()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn set_severity(&mut self, severity: Severity) {
        self.severity = severity;
    }

    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }

    pub fn into_inner(self) -> BoxError {
        self.inner
    }

    /// Print the banner to stdout and exit according to the severity.
    ///
    /// Returns only for [`Severity::Info`].
    pub fn handle(self) {
        self.handle_with(&mut Handler::stdout());
    }

    pub fn handle_with<W: Write, T: Terminate>(self, handler: &mut Handler<W, T>) {
        handler.handle(self);
    }
}

impl fmt::Display for ExtendedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl StdError for ExtendedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}
