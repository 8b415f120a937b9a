//! # Derived Conversions
//!
//! Native types that are not a payload themselves but encode through one.
//! All of them layer on the 64-bit integer or float payload rather than
//! widening the engine's four-class surface.
//!
//! ## Narrowing Policy
//!
//! Decoding an integer payload into a narrower type fails when the value is
//! out of range for the target. The error names the value and the target
//! type. Truncation and saturation are deliberately not offered: both discard
//! information silently, and a caller that wants them can decode `i64` and
//! cast explicitly.

use super::{FromStorage, FromValue, Numeric, StoragePrimitive, ToStorage};
use crate::types::Value;
use eyre::{eyre, Result};

impl ToStorage for bool {
    type Storage = i64;

    #[inline]
    fn to_storage(self) -> i64 {
        if self {
            1
        } else {
            0
        }
    }
}

impl FromStorage for bool {
    /// Any nonzero integer reads back as `true`, matching engine semantics
    /// for boolean columns written by other bindings.
    #[inline]
    fn from_storage(raw: i64) -> bool {
        raw != 0
    }
}

macro_rules! widened_int {
    ($($t:ty),+ $(,)?) => {$(
        impl ToStorage for $t {
            type Storage = i64;

            #[inline]
            fn to_storage(self) -> i64 {
                i64::from(self)
            }
        }

        impl Numeric for $t {}

        impl FromValue for $t {
            fn from_value(value: Value) -> Result<Self> {
                let raw = <i64 as StoragePrimitive>::narrow(value)?;
                <$t>::try_from(raw).map_err(|_| {
                    eyre!(
                        "integer {} out of range for {}",
                        raw,
                        stringify!($t)
                    )
                })
            }
        }
    )+};
}

widened_int!(i8, i16, i32, u8, u16, u32);

impl ToStorage for isize {
    type Storage = i64;

    /// Exact on every supported platform: `isize` is at most 64 bits wide.
    #[inline]
    fn to_storage(self) -> i64 {
        self as i64
    }
}

impl Numeric for isize {}

impl FromValue for isize {
    fn from_value(value: Value) -> Result<Self> {
        let raw = <i64 as StoragePrimitive>::narrow(value)?;
        isize::try_from(raw).map_err(|_| eyre!("integer {} out of range for isize", raw))
    }
}

impl ToStorage for f32 {
    type Storage = f64;

    #[inline]
    fn to_storage(self) -> f64 {
        f64::from(self)
    }
}

impl FromStorage for f32 {
    /// Rounds to the nearest representable `f32`. Total: every `f64` maps to
    /// some `f32` (overflow becomes infinity). Values written as `f32` read
    /// back exactly because the widening encode is lossless.
    #[inline]
    fn from_storage(raw: f64) -> f32 {
        raw as f32
    }
}

impl Numeric for f32 {}

impl<'a> ToStorage for &'a str {
    type Storage = String;

    fn to_storage(self) -> String {
        self.to_owned()
    }
}

impl<'a> ToStorage for &'a [u8] {
    type Storage = Vec<u8>;

    fn to_storage(self) -> Vec<u8> {
        self.to_vec()
    }
}
