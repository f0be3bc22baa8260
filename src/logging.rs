//! Bridge into the `tracing` ecosystem.
//!
//! [`TracingSink`] turns each record into a `tracing` event, so an application
//! that already installed a subscriber can hand the facade to its components
//! without opening a second output stream. The level and message map onto the
//! event's level and message; everything else is rendered as logfmt in a
//! `fields` value.

use crate::error::LogResult;
use crate::format::Format;
use crate::level::{Level, LEVEL_KEY};
use crate::logger::MSG_KEY;
use crate::sink::Sink;
use crate::value::{Field, Value};
use tracing::{debug, error, info, warn};

/// Event target used for forwarded records.
pub const TRACING_TARGET: &str = "kv_logger";

/// Sink that forwards records as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

pub(crate) fn record_level(record: &[Field]) -> Level {
    record
        .iter()
        .find(|(key, _)| key == LEVEL_KEY)
        .and_then(|(_, value)| match value {
            Value::Str(name) => name.parse().ok(),
            _ => None,
        })
        .unwrap_or(Level::Info)
}

impl Sink for TracingSink {
    fn log(&self, record: &[Field]) -> LogResult<()> {
        let level = record_level(record);
        let message = record
            .iter()
            .find(|(key, _)| key == MSG_KEY)
            .map(|(_, value)| value.to_string())
            .unwrap_or_default();

        let rest: Vec<Field> = record
            .iter()
            .filter(|(key, _)| key != LEVEL_KEY && key != MSG_KEY)
            .cloned()
            .collect();
        let mut line = Vec::new();
        Format::Logfmt.encode(&rest, &mut line)?;
        let fields = String::from_utf8_lossy(&line);
        let fields = fields.trim_end();

        match level {
            Level::Debug => debug!(target: TRACING_TARGET, fields = %fields, "{}", message),
            Level::Info => info!(target: TRACING_TARGET, fields = %fields, "{}", message),
            Level::Warn => warn!(target: TRACING_TARGET, fields = %fields, "{}", message),
            Level::Error => error!(target: TRACING_TARGET, fields = %fields, "{}", message),
        }
        Ok(())
    }
}

