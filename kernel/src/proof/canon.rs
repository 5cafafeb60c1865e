//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! Every digest in the workspace (search graph, run report) is computed over
//! bytes produced here, so two runs that make the same decisions produce
//! byte-identical artifacts.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. No extraneous whitespace (compact form: `{"a":1,"b":2}`).
//! 3. Strings are JSON-escaped per RFC 8259 §7.
//! 4. Numbers must be integers (`i64` or `u64`). Floats are rejected.
//! 5. `null`, `true`, `false` are written literally.

use std::io::Write;

use crate::carrier::jug_state::{Capacities, Jug, JugState};
use crate::operators::pour::{Endpoint, PourAction};

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    /// A JSON number was not an integer (float, NaN, Infinity).
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
}

/// Values with a stable JSON form suitable for canonical hashing.
///
/// Search states and actions implement this so the search graph and run
/// report can embed them without a serde dependency on the value types.
pub trait ToCanonicalJson {
    fn to_json_value(&self) -> serde_json::Value;
}

impl ToCanonicalJson for u32 {
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl ToCanonicalJson for u64 {
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl ToCanonicalJson for i64 {
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl ToCanonicalJson for i32 {
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::from(*self)
    }
}

impl ToCanonicalJson for String {
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::from(self.as_str())
    }
}

impl<A: ToCanonicalJson, B: ToCanonicalJson> ToCanonicalJson for (A, B) {
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(vec![self.0.to_json_value(), self.1.to_json_value()])
    }
}

impl ToCanonicalJson for JugState {
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!([self.x, self.y])
    }
}

impl ToCanonicalJson for Capacities {
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!([self.x, self.y])
    }
}

impl ToCanonicalJson for Jug {
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::from(self.name())
    }
}

impl ToCanonicalJson for Endpoint {
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::from(self.name())
    }
}

impl ToCanonicalJson for PourAction {
    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "from": self.source().to_json_value(),
            "quantity": self.quantity(),
            "to": self.destination().to_json_value(),
        })
    }
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any JSON number is not
/// representable as `i64` or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

fn write_value(buf: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Null => buf.extend_from_slice(b"null"),
        serde_json::Value::Bool(true) => buf.extend_from_slice(b"true"),
        serde_json::Value::Bool(false) => buf.extend_from_slice(b"false"),
        serde_json::Value::Number(n) => write_number(buf, n)?,
        serde_json::Value::String(s) => write_string(buf, s),
        serde_json::Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item)?;
            }
            buf.push(b']');
        }
        serde_json::Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            buf.push(b'{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_string(buf, key);
                buf.push(b':');
                write_value(buf, &map[*key])?;
            }
            buf.push(b'}');
        }
    }
    Ok(())
}

fn write_number(buf: &mut Vec<u8>, n: &serde_json::Number) -> Result<(), CanonError> {
    if let Some(i) = n.as_i64() {
        let _ = write!(buf, "{i}");
    } else if let Some(u) = n.as_u64() {
        let _ = write!(buf, "{u}");
    } else {
        return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
    }
    Ok(())
}

fn write_string(buf: &mut Vec<u8>, s: &str) {
    buf.push(b'"');
    for ch in s.chars() {
        match ch {
            '"' => buf.extend_from_slice(b"\\\""),
            '\\' => buf.extend_from_slice(b"\\\\"),
            '\n' => buf.extend_from_slice(b"\\n"),
            '\r' => buf.extend_from_slice(b"\\r"),
            '\t' => buf.extend_from_slice(b"\\t"),
            c if c < '\u{0020}' => {
                let _ = write!(buf, "\\u{:04x}", c as u32);
            }
            c => {
                let mut utf8 = [0u8; 4];
                buf.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
            }
        }
    }
    buf.push(b'"');
}
