//! Output sinks.
//!
//! A [`Sink`] receives a fully composed record and is responsible for encoding
//! and writing it. Loggers never look at what a sink returns; the `Result` is
//! there so sinks can be composed and tested.
//!
//! # Data Flow
//!
//! ```text
//! Logger ──record──▶ WriterSink ──encode──▶ line buffer ──▶ SyncWriter (mutex) ──▶ stream
//! ```
//!
//! Every logger bound to stderr shares one [`SyncWriter`], so records from
//! different threads and different loggers never interleave.

use crate::error::LogResult;
use crate::format::Format;
use crate::value::Field;
use once_cell::sync::Lazy;
use std::io::{self, Stderr, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Destination for composed log records.
#[cfg_attr(test, mockall::automock)]
pub trait Sink: Send + Sync {
    /// Write one record. Fields are in emission order.
    fn log(&self, record: &[Field]) -> LogResult<()>;
}

/// A writer whose whole-record writes are serialized by a mutex.
#[derive(Debug)]
pub struct SyncWriter<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send> SyncWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    /// Write and flush one encoded record while holding the lock.
    pub fn write_record(&self, line: &[u8]) -> LogResult<()> {
        // A panic in another writer must not disable logging for everyone else.
        let mut writer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line)?;
        writer.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

static STDERR: Lazy<Arc<SyncWriter<Stderr>>> =
    Lazy::new(|| Arc::new(SyncWriter::new(io::stderr())));

/// The process-wide synchronized stderr writer.
///
/// Created on first use; every call returns a handle to the same writer.
pub fn stderr_writer() -> Arc<SyncWriter<Stderr>> {
    Arc::clone(&STDERR)
}

/// Sink that encodes records with a [`Format`] and writes them to a shared writer.
#[derive(Debug)]
pub struct WriterSink<W> {
    format: Format,
    writer: Arc<SyncWriter<W>>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(format: Format, writer: Arc<SyncWriter<W>>) -> Self {
        Self { format, writer }
    }

    #[cfg(test)]
    pub(crate) fn format(&self) -> Format {
        self.format
    }
}

impl WriterSink<Stderr> {
    /// Sink bound to the process-wide stderr writer.
    pub fn stderr(format: Format) -> Self {
        Self::new(format, stderr_writer())
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn log(&self, record: &[Field]) -> LogResult<()> {
        let mut line = Vec::with_capacity(128);
        self.format.encode(record, &mut line)?;
        self.writer.write_record(&line)
    }
}
