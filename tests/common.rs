//! Test helper utilities for kv-logger integration tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use kv_logger::{Format, KvLogger, SyncWriter, Value, WriterSink};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for stderr.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    pub fn contents(&self) -> String {
        String::from_utf8(self.inner.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Every captured line parsed as a JSON object.
    pub fn json_records(&self) -> Vec<serde_json::Map<String, serde_json::Value>> {
        self.lines()
            .iter()
            .map(|line| match serde_json::from_str(line) {
                Ok(serde_json::Value::Object(map)) => map,
                other => panic!("Not a JSON object: {line} ({other:?})"),
            })
            .collect()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Same wiring as `new_logger`, with output captured instead of sent to stderr.
pub fn create_test_logger(
    format: &str,
    debug_enabled: bool,
    reduce_info_logs: bool,
    base_fields: &[Value],
) -> (KvLogger, CapturedOutput) {
    let output = CapturedOutput::default();
    let sink = WriterSink::new(
        Format::parse(format),
        Arc::new(SyncWriter::new(output.clone())),
    );
    let logger = KvLogger::with_sink(
        Arc::new(sink),
        debug_enabled,
        reduce_info_logs,
        base_fields,
    );
    (logger, output)
}

/// Extract `key=value` for an unquoted logfmt value.
pub fn logfmt_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let prefix = format!("{key}=");
    line.split(' ')
        .find_map(|pair| pair.strip_prefix(prefix.as_str()))
}
