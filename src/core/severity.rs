//! Severity definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four severities a logger can emit at.
///
/// Each [`Logger`](crate::Logger) exposes one stream per severity; the
/// severity decides the tag and (when color is enabled) the accent a line
/// carries, nothing is ever filtered by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
}

impl Severity {
    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// Error returned when a string does not name a severity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid severity: '{0}'")]
pub struct ParseSeverityError(pub String);
