//! # Pass-Through Conversions
//!
//! The four native types that are exactly the engine's own payloads: `i64`,
//! `f64`, `String`, `Vec<u8>`. Both conversion directions are the identity,
//! which keeps the hot path allocation-free and branch-free.

use super::{FromStorage, Numeric, ToStorage};

macro_rules! passthrough {
    ($($t:ty),+ $(,)?) => {$(
        impl ToStorage for $t {
            type Storage = $t;

            #[inline]
            fn to_storage(self) -> $t {
                self
            }
        }

        impl FromStorage for $t {
            #[inline]
            fn from_storage(raw: $t) -> $t {
                raw
            }
        }
    )+};
}

passthrough!(i64, f64, String, Vec<u8>);

impl Numeric for i64 {}
impl Numeric for f64 {}

#[cfg(test)]
mod tests {
    use crate::bind::{FromValue, ToStorage};
    use crate::types::Value;

    #[test]
    fn integer_roundtrip_preserves_edge_values() {
        for v in [0i64, 1, -1, i64::MIN, i64::MAX] {
            assert_eq!(i64::from_value(v.into_value()).unwrap(), v);
        }
    }

    #[test]
    fn real_roundtrip_preserves_edge_values() {
        for v in [0.0f64, -0.0, f64::MIN, f64::MAX, f64::INFINITY, f64::NEG_INFINITY] {
            let back = f64::from_value(v.into_value()).unwrap();
            assert_eq!(back.to_bits(), v.to_bits());
        }
    }

    #[test]
    fn real_roundtrip_preserves_nan() {
        let back = f64::from_value(f64::NAN.into_value()).unwrap();
        assert!(back.is_nan());
    }

    #[test]
    fn text_roundtrip_preserves_empty_string() {
        assert_eq!(String::new().into_value(), Value::Text(String::new()));
        assert_eq!(
            String::from_value(Value::Text(String::new())).unwrap(),
            ""
        );
    }

    #[test]
    fn text_roundtrip_preserves_content() {
        let s = String::from("héllo wörld");
        assert_eq!(String::from_value(s.clone().into_value()).unwrap(), s);
    }

    #[test]
    fn blob_roundtrip_preserves_bytes() {
        for b in [Vec::new(), vec![0u8], vec![0xff, 0x00, 0x7f]] {
            assert_eq!(
                <Vec<u8>>::from_value(b.clone().into_value()).unwrap(),
                b
            );
        }
    }
}
