use crate::{BoxError, ErrorPolicy, ExtendedError, Severity};

/// Extension trait for `Result` that tags the error side with a [`Severity`]
/// at a subsystem boundary.
///
/// Example
/// ```rust,ignore
/// use severr::{Handler, ResultExt, Severity};
///
/// let token = std::env::var("GITHUB_TOKEN")
///     .map_err(|_| "GITHUB_TOKEN is not defined")
///     .or_handle(Severity::High, &mut Handler::stdout());
/// ```
pub trait ResultExt<T> {
    /// Turn the error into an [`ExtendedError`] with `severity`.
    ///
    /// An error that cannot back an `ExtendedError` (empty message) is
    /// replaced by the construction failure describing it.
    fn with_severity(self, severity: Severity) -> Result<T, ExtendedError>;

    /// Return the value, or hand the error to `policy` and return `None` if
    /// the policy did not end the process.
    fn or_handle(self, severity: Severity, policy: &mut impl ErrorPolicy) -> Option<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn with_severity(self, severity: Severity) -> Result<T, ExtendedError> {
        self.map_err(|e| {
            ExtendedError::new(e, severity)
                .unwrap_or_else(|rejected| ExtendedError::from_rejected(rejected, severity))
        })
    }

    fn or_handle(self, severity: Severity, policy: &mut impl ErrorPolicy) -> Option<T> {
        match self.with_severity(severity) {
            Ok(value) => Some(value),
            Err(e) => {
                policy.emit(e);
                None
            }
        }
    }
}
