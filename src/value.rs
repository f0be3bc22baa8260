//! Key/value elements carried by log records.
//!
//! Log calls take their context as a flat, alternating list of keys and values,
//! usually built with the [`kv!`](crate::kv) macro:
//!
//! ```rust
//! use kv_logger::{kv, Value};
//!
//! let fields = kv!("component", "fetcher", "retry", 3);
//! assert_eq!(fields[0], Value::from("component"));
//! assert_eq!(fields[3], Value::Int(3));
//! ```
//!
//! A list with an odd number of elements gets its last key paired with
//! [`Value::Missing`], written as `(MISSING)`.

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// Placeholder written for a key that has no value.
pub const MISSING_VALUE: &str = "(MISSING)";

/// One resolved record entry: the rendered key and its value.
pub type Field = (String, Value);

/// A key or value element of a log record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    /// Padding for an odd-length key/value list.
    Missing,
}

impl Value {
    /// Capture any displayable value by its textual form.
    pub fn display(value: impl fmt::Display) -> Self {
        Self::Str(value.to_string())
    }

    #[cfg(test)]
    pub(crate) fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::UInt(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::Missing => f.write_str(MISSING_VALUE),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::UInt(u) => serializer.serialize_u64(*u),
            // JSON has no NaN or infinity
            Self::Float(x) if !x.is_finite() => serializer.collect_str(x),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Null => serializer.serialize_unit(),
            Self::Missing => serializer.serialize_str(MISSING_VALUE),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Str(value.into_owned())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::UInt(value as u64)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! impl_from_int {
    ($variant:ident => $wide:ty: $($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::$variant(<$wide>::from(value))
                }
            }
        )+
    };
}

impl_from_int!(Int => i64: i8, i16, i32, i64);
impl_from_int!(UInt => u64: u8, u16, u32, u64);

/// Build an alternating key/value list for a log call.
///
/// Every element goes through `Value::from`, so string slices, integers,
/// floats, bools and options can be mixed freely.
#[macro_export]
macro_rules! kv {
    () => {
        [] as [$crate::Value; 0]
    };
    ($($item:expr),+ $(,)?) => {
        [$($crate::Value::from($item)),+]
    };
}

/// Pair up an alternating key/value list, padding a dangling key with
/// [`Value::Missing`].
pub fn pairs(keyvals: &[Value]) -> Vec<Field> {
    keyvals
        .chunks(2)
        .map(|chunk| {
            let key = chunk[0].to_string();
            let value = chunk.get(1).cloned().unwrap_or(Value::Missing);
            (key, value)
        })
        .collect()
}
