//! Logger configuration.
//!
//! Configuration is read once at startup, either deserialized from the
//! application's own config file or loaded from the environment:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `LOG_FORMAT` | `format` | `logfmt` |
//! | `LOG_DEBUG` | `debug` | `false` |
//! | `LOG_REDUCE_INFO_LOGS` | `reduce_info_logs` | `false` |

use crate::error::{LogError, LogResult};
use crate::format::Format;
use crate::logger::KvLogger;
use crate::sink::Sink;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const ENV_FORMAT: &str = "LOG_FORMAT";
pub const ENV_DEBUG: &str = "LOG_DEBUG";
pub const ENV_REDUCE_INFO_LOGS: &str = "LOG_REDUCE_INFO_LOGS";

/// Settings for a root logger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Record encoding; unknown names mean logfmt.
    pub format: Format,
    /// Admit debug records.
    pub debug: bool,
    /// Passed through to [`Logger::reduce_info_logs`](crate::Logger::reduce_info_logs).
    pub reduce_info_logs: bool,
}

impl LoggerConfig {
    /// Load configuration from `LOG_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidConfig`] if a boolean variable is set to
    /// something other than `1/0`, `true/false`, `yes/no` or `on/off`.
    pub fn from_env() -> LogResult<Self> {
        let mut config = Self::default();
        if let Ok(format) = std::env::var(ENV_FORMAT) {
            config.format = Format::parse(format.trim());
        }
        if let Ok(raw) = std::env::var(ENV_DEBUG) {
            config.debug = parse_bool(ENV_DEBUG, &raw)?;
        }
        if let Ok(raw) = std::env::var(ENV_REDUCE_INFO_LOGS) {
            config.reduce_info_logs = parse_bool(ENV_REDUCE_INFO_LOGS, &raw)?;
        }
        Ok(config)
    }

    /// Root logger on the shared stderr writer.
    pub fn build(&self, base_fields: &[Value]) -> KvLogger {
        KvLogger::new(self.format, self.debug, self.reduce_info_logs, base_fields)
    }

    /// Root logger on a caller-provided sink. `format` is left to the sink.
    pub fn build_with_sink(&self, sink: Arc<dyn Sink>, base_fields: &[Value]) -> KvLogger {
        KvLogger::with_sink(sink, self.debug, self.reduce_info_logs, base_fields)
    }
}

fn parse_bool(key: &str, raw: &str) -> LogResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(LogError::invalid_config(
            key,
            format!("expected a boolean, got {other:?}"),
        )),
    }
}
