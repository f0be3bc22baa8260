//! Error types for the logging facade.
//!
//! Errors only ever surface in two places:
//! - Startup configuration ([`LoggerConfig::from_env`](crate::LoggerConfig::from_env),
//!   [`Level`](crate::Level) parsing), where the caller must decide what to do.
//! - Sink writes ([`Sink::log`](crate::Sink::log)). These are returned to the
//!   logger, which drops them. A log call never fails from the caller's side.
//!
//! # Result Type
//!
//! Use [`LogResult<T>`] as a convenient alias for `Result<T, LogError>`:
//!
//! ```rust
//! use kv_logger::{Level, LogResult};
//!
//! fn parse_level(raw: &str) -> LogResult<Level> {
//!     raw.parse()
//! }
//! ```

use thiserror::Error;

/// Convenient result type for logging operations.
pub type LogResult<T> = std::result::Result<T, LogError>;

/// Errors produced by sinks and configuration parsing.
#[derive(Error, Debug)]
pub enum LogError {
    /// Writing an encoded record to the output stream failed.
    #[error("Failed to write log record: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be encoded.
    #[error("Failed to encode log record: {0}")]
    Encode(#[from] serde_json::Error),

    /// A severity name did not match any known level.
    #[error("Unknown log level: {level}")]
    InvalidLevel {
        /// The name that was rejected.
        level: String,
    },

    /// A configuration value could not be interpreted.
    #[error("Invalid logging configuration for {key}: {message}")]
    InvalidConfig {
        /// The configuration key (usually an environment variable name).
        key: String,
        /// What was wrong with the value.
        message: String,
    },
}

impl LogError {
    pub fn invalid_level(level: impl Into<String>) -> Self {
        Self::InvalidLevel {
            level: level.into(),
        }
    }

    pub fn invalid_config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Whether the error came from the output path rather than configuration.
    ///
    /// Loggers swallow these; configuration errors are returned to the caller.
    #[cfg(test)]
    pub(crate) fn is_sink_failure(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Encode(_))
    }
}
