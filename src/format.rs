//! Record encodings.
//!
//! # Formats
//!
//! | Name | Output |
//! |------|--------|
//! | `json` | One JSON object per line, keys in record order |
//! | anything else | logfmt: space-separated `key=value` pairs |
//!
//! Unrecognized format names fall back to logfmt rather than failing, so a
//! typo in deployment config still yields readable logs.

use crate::error::LogResult;
use crate::value::{Field, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Output encoding selected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Format {
    Json,
    #[default]
    Logfmt,
}

impl Format {
    /// Map a format name to an encoding. Only `"json"` selects JSON.
    pub fn parse(name: &str) -> Self {
        if name == "json" {
            Self::Json
        } else {
            Self::Logfmt
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Logfmt => "logfmt",
        }
    }

    /// Encode one record, newline-terminated, into `out`.
    ///
    /// The whole line is built before anything reaches the output stream.
    pub fn encode(&self, record: &[Field], out: &mut Vec<u8>) -> LogResult<()> {
        match self {
            Self::Json => encode_json(record, out),
            Self::Logfmt => encode_logfmt(record, out),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Format {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for Format {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<Format> for String {
    fn from(format: Format) -> Self {
        format.as_str().to_string()
    }
}

fn encode_json(record: &[Field], out: &mut Vec<u8>) -> LogResult<()> {
    // Duplicate keys: last value wins, first position is kept.
    let mut object = serde_json::Map::with_capacity(record.len());
    for (key, value) in record {
        object.insert(key.clone(), serde_json::to_value(value)?);
    }
    serde_json::to_writer(&mut *out, &object)?;
    out.push(b'\n');
    Ok(())
}

fn encode_logfmt(record: &[Field], out: &mut Vec<u8>) -> LogResult<()> {
    for (i, (key, value)) in record.iter().enumerate() {
        if i > 0 {
            out.push(b' ');
        }
        write_logfmt_key(key, out);
        out.push(b'=');
        write_logfmt_value(value, out)?;
    }
    out.push(b'\n');
    Ok(())
}

fn is_invalid_key_char(c: char) -> bool {
    c.is_whitespace() || c.is_control() || c == '=' || c == '"'
}

fn write_logfmt_key(key: &str, out: &mut Vec<u8>) {
    if key.is_empty() {
        out.push(b'_');
        return;
    }
    let cleaned: String = key
        .chars()
        .map(|c| if is_invalid_key_char(c) { '_' } else { c })
        .collect();
    out.extend_from_slice(cleaned.as_bytes());
}

fn needs_quoting(s: &str) -> bool {
    s.is_empty() || s.chars().any(is_invalid_key_char)
}

fn write_logfmt_value(value: &Value, out: &mut Vec<u8>) -> LogResult<()> {
    let text = match value {
        Value::Str(s) => std::borrow::Cow::Borrowed(s.as_str()),
        other => std::borrow::Cow::Owned(other.to_string()),
    };
    if !needs_quoting(&text) {
        out.extend_from_slice(text.as_bytes());
        return Ok(());
    }

    out.push(b'"');
    for c in text.chars() {
        match c {
            '"' => out.extend_from_slice(b"\\\""),
            '\\' => out.extend_from_slice(b"\\\\"),
            '\n' => out.extend_from_slice(b"\\n"),
            '\r' => out.extend_from_slice(b"\\r"),
            '\t' => out.extend_from_slice(b"\\t"),
            c if c.is_control() => write!(out, "\\u{:04x}", c as u32)?,
            c => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    out.push(b'"');
    Ok(())
}
