//! # Conversion Capabilities
//!
//! Conversions between native Rust types and the engine's [`Value`]
//! representation.
//!
//! ## Types
//!
//! | Rust type          | Declared class | Payload   | Decode |
//! |--------------------|----------------|-----------|--------|
//! | `i64`              | INTEGER        | `i64`     | identity |
//! | `f64`              | REAL           | `f64`     | identity |
//! | `String`           | TEXT           | `String`  | identity |
//! | `Vec<u8>`          | BLOB           | `Vec<u8>` | identity |
//! | `bool`             | INTEGER        | `i64`     | `raw != 0` |
//! | `isize`            | INTEGER        | `i64`     | range-checked |
//! | `i8`, `i16`, `i32` | INTEGER        | `i64`     | range-checked |
//! | `u8`, `u16`, `u32` | INTEGER        | `i64`     | range-checked |
//! | `f32`              | REAL           | `f64`     | rounds to nearest |
//! | `&str`             | TEXT           | `String`  | encode only |
//! | `&[u8]`            | BLOB           | `Vec<u8>` | encode only |
//!
//! Unsigned types zero-extend into the signed 64-bit payload, which is always
//! exact. `u64` and `usize` are unsupported: their upper range does not fit
//! `i64`, and bit-casting would change the value's meaning in SQL.
//!
//! ## Capability Layout
//!
//! - [`StoragePrimitive`]: sealed, implemented exactly for the four payload
//!   types. Wraps into / narrows out of a tagged `Value`.
//! - [`ToStorage`]: binding direction. Total, never fails. Carries the
//!   declared storage class for schema generation; types stored through a
//!   representation type (bool, isize) inherit its class instead of
//!   restating the literal.
//! - [`FromStorage`]: total decode from the already-matched payload. A
//!   variant mismatch cannot reach these impls.
//! - [`FromValue`]: fallible decode from a tagged `Value`. Blanket-implemented
//!   for every `FromStorage` type, so total decoders never hand-write an
//!   error path. Implemented directly only where decoding genuinely can fail
//!   (integer narrowing).
//! - [`Numeric`]: empty marker gating arithmetic and comparison operators in
//!   the query-building layer.
//!
//! ## Failure Semantics
//!
//! `from_value` fails in exactly two cases, both recoverable errors:
//!
//! 1. The `Value` variant does not match the requested type's payload
//!    ("expected INTEGER, got TEXT").
//! 2. An integer payload is out of range for a narrower target type. The
//!    narrowing policy is fail, not truncate or saturate.

mod derived;
mod primitives;

use crate::types::{StorageClass, Value};
use eyre::{bail, Result};

mod sealed {
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for String {}
    impl Sealed for Vec<u8> {}
}

/// One of the four payload types the engine can hold directly.
///
/// Sealed: the engine-facing surface is exactly four classes, forever.
/// Richer native types layer on top via [`ToStorage`] rather than widening
/// this set.
pub trait StoragePrimitive: sealed::Sealed + Sized {
    /// Storage class of this payload.
    const CLASS: StorageClass;

    /// Wraps the payload into a tagged value. Infallible.
    fn wrap(self) -> Value;

    /// Extracts the payload from a tagged value, rejecting other variants.
    fn narrow(value: Value) -> Result<Self>;
}

macro_rules! storage_primitive {
    ($($t:ty => $variant:ident),+ $(,)?) => {$(
        impl StoragePrimitive for $t {
            const CLASS: StorageClass = StorageClass::$variant;

            fn wrap(self) -> Value {
                Value::$variant(self)
            }

            fn narrow(value: Value) -> Result<Self> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => bail!(
                        "expected {}, got {}",
                        <Self as StoragePrimitive>::CLASS.sql_name(),
                        other.kind().sql_name()
                    ),
                }
            }
        }
    )+};
}

storage_primitive! {
    i64 => Integer,
    f64 => Real,
    String => Text,
    Vec<u8> => Blob,
}

/// Capability for binding a native type into the engine.
///
/// One implementation per native type. `to_storage` is total: every in-scope
/// value has a valid storage representation.
pub trait ToStorage: Sized {
    /// The payload this type is stored as.
    type Storage: StoragePrimitive;

    /// Storage class used when declaring columns of this type.
    ///
    /// Defaults to the payload's class, so types stored through a
    /// representation type pick up its classification automatically.
    const CLASS: StorageClass = <Self::Storage as StoragePrimitive>::CLASS;

    /// Converts this value into its storage payload.
    fn to_storage(self) -> Self::Storage;

    /// Converts this value into a tagged engine value.
    fn into_value(self) -> Value {
        self.to_storage().wrap()
    }
}

/// Total decoding from the matching payload.
///
/// The input is already narrowed to `Self::Storage`, so a representation
/// mismatch is unrepresentable here. Implement this instead of [`FromValue`]
/// whenever the decode cannot fail; the fallible form comes for free.
pub trait FromStorage: ToStorage {
    fn from_storage(raw: Self::Storage) -> Self;
}

/// Fallible extraction from a tagged engine value.
///
/// This is the contract the row-mapping layer calls. Decoders that genuinely
/// can fail (integer narrowing, externally-validated types) implement it
/// directly; everything else goes through the [`FromStorage`] blanket.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self>;
}

impl<T: FromStorage> FromValue for T {
    fn from_value(value: Value) -> Result<Self> {
        Ok(T::from_storage(<T::Storage as StoragePrimitive>::narrow(
            value,
        )?))
    }
}

/// Marker for types the query layer may apply arithmetic and comparison
/// operators to. Carries no operations of its own.
pub trait Numeric: ToStorage {}

/// Returns the SQL type name a column of type `T` is declared as.
pub fn declared_sql_type<T: ToStorage>() -> &'static str {
    T::CLASS.sql_name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirected_types_share_the_integer_classification() {
        assert_eq!(<bool as ToStorage>::CLASS, <i64 as ToStorage>::CLASS);
        assert_eq!(<isize as ToStorage>::CLASS, <i64 as ToStorage>::CLASS);
    }

    #[test]
    fn declared_sql_types() {
        assert_eq!(declared_sql_type::<i64>(), "INTEGER");
        assert_eq!(declared_sql_type::<f64>(), "REAL");
        assert_eq!(declared_sql_type::<String>(), "TEXT");
        assert_eq!(declared_sql_type::<Vec<u8>>(), "BLOB");
        assert_eq!(declared_sql_type::<bool>(), "INTEGER");
        assert_eq!(declared_sql_type::<isize>(), "INTEGER");
        assert_eq!(declared_sql_type::<f32>(), "REAL");
    }

    #[test]
    fn total_decoders_bridge_to_from_value_with_identical_results() {
        let via_fallible: i64 = i64::from_value(Value::Integer(9)).unwrap();
        assert_eq!(via_fallible, i64::from_storage(9));

        let via_fallible: bool = bool::from_value(Value::Integer(7)).unwrap();
        assert_eq!(via_fallible, bool::from_storage(7));
    }

    #[test]
    fn variant_mismatch_is_a_recoverable_error() {
        let err = String::from_value(Value::Integer(1)).unwrap_err();
        assert!(err.to_string().contains("expected TEXT"));

        let err = bool::from_value(Value::Text("yes".into())).unwrap_err();
        assert!(err.to_string().contains("expected INTEGER"));
    }
}
