//! Log severity levels.

use crate::error::{LogError, LogResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Record key carrying the severity.
pub const LEVEL_KEY: &str = "level";

/// Severity of a log record, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Diagnostic detail, only emitted when debug is enabled.
    Debug,
    /// Normal operational messages.
    Info,
    /// Something unexpected that did not stop the operation.
    Warn,
    /// An operation failed.
    Error,
}

impl Level {
    /// Lowercase name as written into records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// The lowest level admitted by a logger's severity filter.
    pub fn threshold(debug_enabled: bool) -> Self {
        if debug_enabled {
            Self::Debug
        } else {
            Self::Info
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> LogResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(LogError::invalid_level(s)),
        }
    }
}
