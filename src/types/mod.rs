//! # Engine Value Types
//!
//! This module provides the representation of what the storage engine can
//! physically hold: the four-variant [`Value`] and its [`StorageClass`] tag.
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `Value` | Tagged engine value, exactly one of four payloads |
//! | `StorageClass` | Storage-level classification, also used in schema text |
//!
//! `Value` is the only currency crossing the engine boundary: parameter
//! binding produces one, row reading yields one. Native-type conversions on
//! top of these live in [`crate::bind`].

mod storage_class;
mod value;

pub use storage_class::StorageClass;
pub use value::Value;
