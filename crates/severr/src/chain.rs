//! Building and walking causal error chains.
//!
//! A chain is the sequence produced by repeatedly calling
//! [`std::error::Error::source`]. Chains are assumed finite and acyclic.
use std::error::Error as StdError;
use std::fmt;

use crate::BoxError;

/// `outer` with extra detail folded into its rendered text.
///
/// Renders as `"<outer>:\n    <detail>"`. Only `outer` stays reachable
/// through [`StdError::source`].
#[derive(Debug, thiserror::Error)]
#[error("{outer}:\n    {detail}")]
pub struct WrappedError {
    #[source]
    outer: BoxError,
    detail: String,
}

impl WrappedError {
    pub fn outer(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.outer
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

pub fn wrap_error<O, I>(outer: O, inner: I) -> WrappedError
where
    O: Into<BoxError>,
    I: fmt::Display,
{
    WrappedError {
        outer: outer.into(),
        detail: inner.to_string(),
    }
}

/// Return the innermost error of `err`'s chain, or `err` itself when it has
/// no source.
///
/// Each cause passed on the way down is reported as a `DEBUG` event.
pub fn unwrap_error<'a>(err: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    let mut current = err;
    while let Some(cause) = current.source() {
        tracing::debug!(target: "severr::chain", cause = %cause, "unwrapping error");
        current = cause;
    }
    current
}

/// Iterate over `err` and each successive source, outermost first.
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain { next: Some(err) }
}

#[derive(Clone, Debug)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}
