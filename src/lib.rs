//! # kv-logger
//!
//! Leveled, structured key/value logging facade with JSON and logfmt output.
//!
//! ## Key Features
//!
//! - **Four levels**: `debug`, `info`, `warn`, `error`; debug is opt-in
//! - **Structured context**: alternating key/value fields, accumulated with `with`
//! - **Two encodings**: JSON objects or logfmt lines, one record per line
//! - **Enrichment**: every record carries a UTC `ts` and the `caller` file:line
//! - **Never fails**: output errors are swallowed, a log call cannot break the caller
//! - **No-op logger**: for tests and for silencing a component entirely
//!
//! ## Example
//!
//! ```rust,no_run
//! use kv_logger::{kv, new_logger, Logger};
//!
//! let logger = new_logger("logfmt", true, false, &kv!("service", "exporter"));
//! let fetcher = logger.with(&kv!("component", "fetcher"));
//! fetcher.debug("starting", &kv!());
//! // level=debug ts=... caller=main.rs:5 service=exporter component=fetcher msg=starting
//!
//! if !logger.reduce_info_logs() {
//!     logger.info("scrape finished", &kv!("targets", 12, "duration_ms", 85));
//! }
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod sink;
pub mod value;

// Bridge into tracing subscribers
#[cfg(feature = "tracing")]
pub mod logging;

#[cfg(test)]
pub mod tests;

pub use config::LoggerConfig;
pub use error::{LogError, LogResult};
pub use format::Format;
pub use level::Level;
pub use logger::{new_logger, new_nop_logger, KvLogger, Logger, NopLogger};
pub use sink::{stderr_writer, Sink, SyncWriter, WriterSink};
pub use value::{Field, Value};

#[cfg(feature = "tracing")]
pub use logging::TracingSink;
