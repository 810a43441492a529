//! Structured, log-friendly views of handled errors.
//!
//! Gated behind the `serde` feature so consumers that only print and exit
//! do not pull in serialization dependencies.

#![cfg(feature = "serde")]

use serde::Serialize;

use crate::{ExtendedError, Severity, chain};

/// Provide a structured view of an error for logging.
pub trait PrettyDebug {
    type Fields<'a>: Serialize + 'a
    where
        Self: 'a;

    fn fields(&self) -> Self::Fields<'_>;

    /// Fields as a JSON value, `None` if serialization fails.
    fn to_value(&self) -> Option<serde_json::Value> {
        serde_json::to_value(self.fields()).ok()
    }

    fn pretty_json(&self) -> Option<String> {
        serde_json::to_string_pretty(&self.fields()).ok()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorFields {
    pub severity: Severity,
    pub exit_code: Option<i32>,
    pub message: String,
    /// Messages of each source below the top-level error, outermost first.
    pub causes: Vec<String>,
}

impl PrettyDebug for ExtendedError {
    type Fields<'a> = ErrorFields;

    fn fields(&self) -> Self::Fields<'_> {
        ErrorFields {
            severity: self.severity(),
            exit_code: self.severity().exit_code(),
            message: self.error_message(),
            causes: chain(self).skip(1).map(|e| e.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PrettyDebug;
    use crate::{ExtendedError, Severity, wrap_error};

    #[test]
    fn value_carries_severity_and_causes() {
        let err = ExtendedError::new(
            wrap_error("error connecting to github", "timeout"),
            Severity::High,
        )
        .unwrap();

        let value = err.to_value().expect("value");
        assert_eq!(value["severity"], "high");
        assert_eq!(value["exit_code"], 1);
        assert_eq!(value["message"], "error connecting to github:\n    timeout");
        assert_eq!(value["causes"][0], "error connecting to github");
    }

    #[test]
    fn info_has_null_exit_code() {
        let err = ExtendedError::new("error adding labels to the PR", Severity::Info).unwrap();
        let pretty = err.pretty_json().expect("pretty json");
        assert!(pretty.contains("\"exit_code\": null"));
        assert!(pretty.contains("\"severity\": \"info\""));
    }
}
