//! # Tagged Engine Value
//!
//! `Value` is the runtime representation of what the storage engine holds:
//! a sum type over exactly four payloads. Every value bound into a statement
//! or read out of a result row passes through this type.
//!
//! ## Value Variants
//!
//! | Variant | Rust Type | Description |
//! |---------|-----------|-------------|
//! | Integer | `i64`     | 64-bit signed integer |
//! | Real    | `f64`     | 64-bit floating point |
//! | Text    | `String`  | Character string |
//! | Blob    | `Vec<u8>` | Arbitrary bytes, no validity constraint |
//!
//! ## Semantics
//!
//! - Values are immutable once constructed; exactly one payload is active.
//! - Equality is by payload value. `Integer` and `Real` are distinct storage
//!   representations even when numerically equal: `Integer(1) != Real(1.0)`.
//! - `Real(NaN)` compares unequal to itself, matching `f64` semantics.
//!
//! ## Ownership
//!
//! `Text` and `Blob` payloads are owned. Construction from borrowed data
//! (`&str`, `&[u8]`) deep-copies, so a `Value` never aliases an engine buffer
//! and stays valid after the engine's cursor advances or the statement is
//! reset.

use super::StorageClass;

/// Tagged value as the storage engine holds it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Returns the storage class of the active variant.
    pub fn kind(&self) -> StorageClass {
        match self {
            Value::Integer(_) => StorageClass::Integer,
            Value::Real(_) => StorageClass::Real,
            Value::Text(_) => StorageClass::Text,
            Value::Blob(_) => StorageClass::Blob,
        }
    }

    /// Formats the value as a display string.
    pub fn display_string(&self) -> String {
        match self {
            Value::Integer(i) => i.to_string(),
            Value::Real(f) => f.to_string(),
            Value::Text(s) => s.clone(),
            Value::Blob(b) => format!("\\x{}", hex_encode(b)),
        }
    }
}

fn hex_encode(data: &[u8]) -> String {
    data.iter().map(|b| format!("{:02x}", b)).collect()
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Integer(if v { 1 } else { 0 })
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Blob(v.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_active_variant() {
        assert_eq!(Value::Integer(0).kind(), StorageClass::Integer);
        assert_eq!(Value::Real(0.0).kind(), StorageClass::Real);
        assert_eq!(Value::Text(String::new()).kind(), StorageClass::Text);
        assert_eq!(Value::Blob(Vec::new()).kind(), StorageClass::Blob);
    }

    #[test]
    fn integer_and_real_are_distinct_representations() {
        assert_ne!(Value::Integer(1), Value::Real(1.0));
        assert_ne!(Value::Integer(0), Value::Real(0.0));
    }

    #[test]
    fn equality_is_by_payload() {
        assert_eq!(Value::Integer(7), Value::Integer(7));
        assert_eq!(Value::Text("abc".into()), Value::Text("abc".into()));
        assert_ne!(Value::Blob(vec![1]), Value::Blob(vec![2]));
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        assert_ne!(Value::Real(f64::NAN), Value::Real(f64::NAN));
    }

    #[test]
    fn borrowed_construction_deep_copies() {
        let s = String::from("hello");
        let v = Value::from(s.as_str());
        drop(s);
        assert_eq!(v, Value::Text("hello".into()));
    }

    #[test]
    fn blob_displays_as_hex() {
        assert_eq!(Value::Blob(vec![0xde, 0xad]).display_string(), "\\xdead");
        assert_eq!(Value::Blob(Vec::new()).display_string(), "\\x");
    }
}
