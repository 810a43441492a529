//! Closed classification of how fatal an error is.
//!
//! Each level selects a termination action when the error reaches a
//! [`crate::Handler`]:
//! - Severe: exit code 2
//! - High: exit code 1
//! - Low: exit code 0
//! - Info: no exit, control returns to the caller
use std::fmt;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    Severe = 0,
    High = 1,
    Low = 2,
    Info = 3,
}

impl Severity {
    /// Every level, most fatal first.
    pub const ALL: [Severity; 4] = [
        Severity::Severe,
        Severity::High,
        Severity::Low,
        Severity::Info,
    ];

    /// Process exit code for this level, or `None` when handling should
    /// return control instead of terminating.
    pub const fn exit_code(self) -> Option<i32> {
        match self {
            Severity::Severe => Some(2),
            Severity::High => Some(1),
            Severity::Low => Some(0),
            Severity::Info => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Severe => "severe",
            Severity::High => "high",
            Severity::Low => "low",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
