//! Severity-tagged errors and the policy that renders them and ends the process.
//!
//! A caller detects a condition, builds an [`ExtendedError`] with a
//! [`Severity`], optionally folds extra context in with [`wrap_error`], and
//! hands it to a [`Handler`]. The handler prints
//!
//! ```text
//! Error:
//!   <message>
//! ```
//!
//! and then exits with the code the severity selects, or returns control for
//! [`Severity::Info`].
//!
//! ```rust,no_run
//! use severr::{ExtendedError, Severity};
//!
//! fn main() -> severr::Result<()> {
//!     let err = ExtendedError::new("GITHUB_TOKEN is not defined", Severity::High)?;
//!     err.handle(); // prints the banner, exits with code 1
//!     Ok(())
//! }
//! ```
pub mod chain;
pub mod extended;
pub mod handler;
pub mod policy;
pub mod pretty;
pub mod result_ext;
pub mod severity;

// public exports
pub use chain::{Chain, WrappedError, chain, unwrap_error, wrap_error};
pub use extended::ExtendedError;
pub use handler::{BANNER, Handler, ProcessExit, RecordedExit, Terminate, render_banner};
pub use policy::{ErrorPolicy, NoopPolicy, TracingPolicy};
pub use result_ext::ResultExt;
pub use severity::Severity;

/// Owned, thread-safe error object used as the underlying error of an
/// [`ExtendedError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The underlying error was missing or rendered nothing.
    #[error("invalid error: {0}")]
    InvalidError(String),
}
