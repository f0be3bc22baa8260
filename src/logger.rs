//! The logging facade.
//!
//! [`Logger`] is the capability set the rest of an application depends on.
//! There are two implementations:
//! - [`KvLogger`] composes records and hands them to a [`Sink`].
//! - [`NopLogger`] does nothing at all.
//!
//! # Record layout
//!
//! ```text
//! level  ts  caller  <base fields>  <with fields...>  msg  [err]  <call fields>
//! ```
//!
//! `ts` is taken when the record is emitted, and `caller` is the file and line
//! of the logging call (not a frame inside this crate).
//!
//! # Example
//!
//! ```rust,no_run
//! use kv_logger::{kv, new_logger, Logger};
//!
//! let logger = new_logger("json", false, false, &kv!("service", "exporter"));
//! let fetcher = logger.with(&kv!("component", "fetcher"));
//! fetcher.info("scrape finished", &kv!("targets", 12));
//!
//! let err = std::io::Error::other("connection reset");
//! fetcher.error(&err, "scrape failed", &kv!("retry", 3));
//! ```

use crate::format::Format;
use crate::level::{Level, LEVEL_KEY};
use crate::sink::{Sink, WriterSink};
use crate::value::{pairs, Field, Value};
use chrono::{DateTime, SecondsFormat, Utc};
use std::error::Error;
use std::fmt;
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

pub const TS_KEY: &str = "ts";
pub const CALLER_KEY: &str = "caller";
pub const MSG_KEY: &str = "msg";
pub const ERR_KEY: &str = "err";

/// Source of record timestamps.
pub type Clock = fn() -> DateTime<Utc>;

/// Leveled, structured logging capability.
///
/// Emission methods never return errors and never panic because of the
/// output stream. `keyvals` is an alternating key/value list, see
/// [`kv!`](crate::kv).
///
/// `Box<dyn Logger>` and `Arc<dyn Logger>` implement the trait too, so a
/// logger picked at runtime still supports `with`.
pub trait Logger: Send + Sync {
    /// Log at debug level. Dropped unless debug is enabled.
    #[track_caller]
    fn debug(&self, message: &str, keyvals: &[Value]);

    #[track_caller]
    fn info(&self, message: &str, keyvals: &[Value]);

    #[track_caller]
    fn warn(&self, message: &str, keyvals: &[Value]);

    /// Log at error level, adding `err` with the error's display form.
    #[track_caller]
    fn error(&self, err: &dyn Error, message: &str, keyvals: &[Value]);

    /// A new logger that adds `keyvals` to every record. The receiver is unchanged.
    ///
    /// The derived logger keeps the debug setting but always reports `false`
    /// from [`reduce_info_logs`](Logger::reduce_info_logs).
    fn with(&self, keyvals: &[Value]) -> Self
    where
        Self: Sized;

    /// Object-safe form of [`with`](Logger::with).
    fn with_dyn(&self, keyvals: &[Value]) -> Box<dyn Logger>;

    fn is_debug_enabled(&self) -> bool;

    /// Hint for callers that want to skip or downgrade their own info logs.
    /// The logger itself never acts on it.
    fn reduce_info_logs(&self) -> bool;
}

impl Logger for Box<dyn Logger> {
    #[track_caller]
    fn debug(&self, message: &str, keyvals: &[Value]) {
        (**self).debug(message, keyvals)
    }

    #[track_caller]
    fn info(&self, message: &str, keyvals: &[Value]) {
        (**self).info(message, keyvals)
    }

    #[track_caller]
    fn warn(&self, message: &str, keyvals: &[Value]) {
        (**self).warn(message, keyvals)
    }

    #[track_caller]
    fn error(&self, err: &dyn Error, message: &str, keyvals: &[Value]) {
        (**self).error(err, message, keyvals)
    }

    fn with(&self, keyvals: &[Value]) -> Self {
        (**self).with_dyn(keyvals)
    }

    fn with_dyn(&self, keyvals: &[Value]) -> Box<dyn Logger> {
        (**self).with_dyn(keyvals)
    }

    fn is_debug_enabled(&self) -> bool {
        (**self).is_debug_enabled()
    }

    fn reduce_info_logs(&self) -> bool {
        (**self).reduce_info_logs()
    }
}

impl Logger for Arc<dyn Logger> {
    #[track_caller]
    fn debug(&self, message: &str, keyvals: &[Value]) {
        (**self).debug(message, keyvals)
    }

    #[track_caller]
    fn info(&self, message: &str, keyvals: &[Value]) {
        (**self).info(message, keyvals)
    }

    #[track_caller]
    fn warn(&self, message: &str, keyvals: &[Value]) {
        (**self).warn(message, keyvals)
    }

    #[track_caller]
    fn error(&self, err: &dyn Error, message: &str, keyvals: &[Value]) {
        (**self).error(err, message, keyvals)
    }

    fn with(&self, keyvals: &[Value]) -> Self {
        Arc::from((**self).with_dyn(keyvals))
    }

    fn with_dyn(&self, keyvals: &[Value]) -> Box<dyn Logger> {
        (**self).with_dyn(keyvals)
    }

    fn is_debug_enabled(&self) -> bool {
        (**self).is_debug_enabled()
    }

    fn reduce_info_logs(&self) -> bool {
        (**self).reduce_info_logs()
    }
}

/// Build a root logger writing to stderr.
///
/// `format` is `"json"` for JSON records; any other value selects logfmt.
/// `base_fields` is an alternating key/value list added to every record.
pub fn new_logger(
    format: &str,
    debug_enabled: bool,
    reduce_info_logs: bool,
    base_fields: &[Value],
) -> KvLogger {
    KvLogger::new(
        Format::parse(format),
        debug_enabled,
        reduce_info_logs,
        base_fields,
    )
}

/// A logger that discards everything.
pub fn new_nop_logger() -> NopLogger {
    NopLogger
}

fn system_clock() -> DateTime<Utc> {
    Utc::now()
}

/// Sink-backed logger.
///
/// Cloning is cheap: the sink and accumulated fields are shared, never mutated.
#[derive(Clone)]
pub struct KvLogger {
    sink: Arc<dyn Sink>,
    context: Arc<[Field]>,
    debug_enabled: bool,
    reduce_info_logs: bool,
    clock: Clock,
}

impl KvLogger {
    /// Root logger on the shared stderr writer.
    pub fn new(
        format: Format,
        debug_enabled: bool,
        reduce_info_logs: bool,
        base_fields: &[Value],
    ) -> Self {
        Self::with_sink(
            Arc::new(WriterSink::stderr(format)),
            debug_enabled,
            reduce_info_logs,
            base_fields,
        )
    }

    /// Root logger on an arbitrary sink.
    pub fn with_sink(
        sink: Arc<dyn Sink>,
        debug_enabled: bool,
        reduce_info_logs: bool,
        base_fields: &[Value],
    ) -> Self {
        Self {
            sink,
            context: pairs(base_fields).into(),
            debug_enabled,
            reduce_info_logs,
            clock: system_clock,
        }
    }

    /// Replace the timestamp source.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Concrete form of [`Logger::with`].
    pub fn with_fields(&self, keyvals: &[Value]) -> Self {
        let mut context = Vec::with_capacity(self.context.len() + keyvals.len().div_ceil(2));
        context.extend(self.context.iter().cloned());
        context.extend(pairs(keyvals));
        Self {
            sink: Arc::clone(&self.sink),
            context: context.into(),
            debug_enabled: self.debug_enabled,
            // not carried over to derived loggers
            reduce_info_logs: false,
            clock: self.clock,
        }
    }

    /// Fields attached by construction and `with`, in order.
    pub fn context(&self) -> &[Field] {
        &self.context
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= Level::threshold(self.debug_enabled)
    }

    #[track_caller]
    fn emit(&self, level: Level, message: &str, err: Option<&dyn Error>, keyvals: &[Value]) {
        if !self.enabled(level) {
            return;
        }
        let caller = Location::caller();

        let mut record: Vec<Field> =
            Vec::with_capacity(6 + self.context.len() + keyvals.len().div_ceil(2));
        record.push((LEVEL_KEY.to_string(), Value::from(level.as_str())));
        record.push((
            TS_KEY.to_string(),
            Value::Str(format_timestamp((self.clock)())),
        ));
        record.push((CALLER_KEY.to_string(), Value::Str(format_caller(caller))));
        record.extend(self.context.iter().cloned());
        record.push((MSG_KEY.to_string(), Value::from(message)));
        if let Some(err) = err {
            record.push((ERR_KEY.to_string(), Value::display(err)));
        }
        record.extend(pairs(keyvals));

        // Write failures are dropped; logging must not affect the caller.
        let _ = self.sink.log(&record);
    }
}

/// RFC 3339 in UTC with trailing zeros trimmed from the fractional seconds.
fn format_timestamp(ts: DateTime<Utc>) -> String {
    let formatted = ts.to_rfc3339_opts(SecondsFormat::Nanos, true);
    let body = formatted.trim_end_matches('Z');
    let body = match body.split_once('.') {
        Some((secs, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                secs.to_string()
            } else {
                format!("{secs}.{frac}")
            }
        }
        None => body.to_string(),
    };
    format!("{body}Z")
}

/// `file:line` with the file reduced to its name.
fn format_caller(location: &Location<'_>) -> String {
    let file = Path::new(location.file())
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(location.file());
    format!("{}:{}", file, location.line())
}

impl fmt::Debug for KvLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KvLogger")
            .field("context", &self.context)
            .field("debug_enabled", &self.debug_enabled)
            .field("reduce_info_logs", &self.reduce_info_logs)
            .finish_non_exhaustive()
    }
}

impl Logger for KvLogger {
    #[track_caller]
    fn debug(&self, message: &str, keyvals: &[Value]) {
        if self.debug_enabled {
            self.emit(Level::Debug, message, None, keyvals);
        }
    }

    #[track_caller]
    fn info(&self, message: &str, keyvals: &[Value]) {
        self.emit(Level::Info, message, None, keyvals);
    }

    #[track_caller]
    fn warn(&self, message: &str, keyvals: &[Value]) {
        self.emit(Level::Warn, message, None, keyvals);
    }

    #[track_caller]
    fn error(&self, err: &dyn Error, message: &str, keyvals: &[Value]) {
        self.emit(Level::Error, message, Some(err), keyvals);
    }

    fn with(&self, keyvals: &[Value]) -> Self {
        self.with_fields(keyvals)
    }

    fn with_dyn(&self, keyvals: &[Value]) -> Box<dyn Logger> {
        Box::new(self.with_fields(keyvals))
    }

    fn is_debug_enabled(&self) -> bool {
        self.debug_enabled
    }

    fn reduce_info_logs(&self) -> bool {
        self.reduce_info_logs
    }
}

/// Logger whose every method is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopLogger;

impl Logger for NopLogger {
    fn debug(&self, _message: &str, _keyvals: &[Value]) {}

    fn info(&self, _message: &str, _keyvals: &[Value]) {}

    fn warn(&self, _message: &str, _keyvals: &[Value]) {}

    fn error(&self, _err: &dyn Error, _message: &str, _keyvals: &[Value]) {}

    fn with(&self, _keyvals: &[Value]) -> Self {
        NopLogger
    }

    fn with_dyn(&self, _keyvals: &[Value]) -> Box<dyn Logger> {
        Box::new(NopLogger)
    }

    fn is_debug_enabled(&self) -> bool {
        false
    }

    fn reduce_info_logs(&self) -> bool {
        false
    }
}
