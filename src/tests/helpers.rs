//! Test helper utilities for kv-logger unit tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use crate::error::LogResult;
use crate::sink::Sink;
use crate::value::{Field, Value};
use chrono::{DateTime, TimeZone, Utc};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Sink that keeps every record it receives.
#[derive(Debug, Default)]
pub struct CaptureSink {
    records: Mutex<Vec<Vec<Field>>>,
}

impl CaptureSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn records(&self) -> Vec<Vec<Field>> {
        self.records.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl Sink for CaptureSink {
    fn log(&self, record: &[Field]) -> LogResult<()> {
        self.records.lock().unwrap().push(record.to_vec());
        Ok(())
    }
}

/// Value of the first field named `key`, if any.
pub fn field<'a>(record: &'a [Field], key: &str) -> Option<&'a Value> {
    record.iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// Keys of a record in emission order.
pub fn keys(record: &[Field]) -> Vec<&str> {
    record.iter().map(|(k, _)| k.as_str()).collect()
}

/// Writer that appends into a shared buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.inner.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer whose every operation fails, like a closed stream.
#[derive(Debug, Default)]
pub struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }
}

/// Fixed clock for deterministic timestamps.
pub fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
}

pub const FIXED_TS: &str = "2024-05-01T12:30:00Z";

/// Fixed clock 120ms past [`fixed_clock`].
pub fn fractional_clock() -> DateTime<Utc> {
    fixed_clock() + chrono::Duration::milliseconds(120)
}
