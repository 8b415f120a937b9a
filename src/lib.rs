//! # OpalDB Value Binding
//!
//! This crate is the typed value-binding layer of the OpalDB embedded
//! database: the seam between the storage engine's four physical storage
//! classes and the native Rust types an application binds into statements
//! and reads out of result rows.
//!
//! The storage engine only knows how to hold four shapes of data. Everything
//! an application writes or reads is coerced through this closed set:
//!
//! | Storage class | Payload   | Native types mapped onto it                  |
//! |---------------|-----------|----------------------------------------------|
//! | INTEGER       | `i64`     | `i64`, `bool`, `isize`, sized ints, unsigned |
//! | REAL          | `f64`     | `f64`, `f32`                                 |
//! | TEXT          | `String`  | `String`, `&str`                             |
//! | BLOB          | `Vec<u8>` | `Vec<u8>`, `&[u8]`                           |
//!
//! ## Architecture
//!
//! ```text
//! native value (i64, bool, String, ...)
//!     │  ToStorage::to_storage          ▲  FromValue::from_value
//!     ▼                                 │
//! storage payload (i64 / f64 / String / Vec<u8>)
//!     │  StoragePrimitive::wrap         ▲  StoragePrimitive::narrow
//!     ▼                                 │
//! Value (tagged engine value) ──► statement binder / ◄── row reader
//! ```
//!
//! Binding a parameter is total: every in-scope native value has a storage
//! representation, so `to_storage` never fails. Extraction is fallible at the
//! tagged-value boundary: `FromValue` rejects a variant mismatch with an
//! error, then hands the matched payload to the total `FromStorage` decode.
//!
//! ## Usage
//!
//! ```ignore
//! use opaldb_bind::{declared_sql_type, FromValue, Params, Row, Value};
//!
//! // Schema generation
//! assert_eq!(declared_sql_type::<bool>(), "INTEGER");
//!
//! // Binding parameters
//! let mut params = Params::new();
//! params.push(42i64);
//! params.push("alice");
//! params.push(true);
//!
//! // Extracting from a result row
//! let row = Row::new(vec![Value::Integer(1), Value::Text("alice".into())]);
//! let id: i64 = row.decode(0)?;
//! let name: String = row.decode(1)?;
//! ```
//!
//! ## Module Overview
//!
//! - [`types`]: the `Value` engine representation and `StorageClass` tags
//! - [`bind`]: conversion capabilities (`ToStorage`, `FromStorage`,
//!   `FromValue`) and the built-in implementations
//! - [`row`]: the statement-binder and result-row seam (`Params`, `Row`)
//!
//! ## Concurrency
//!
//! Every conversion is a pure, synchronous function of its single input.
//! There is no shared state anywhere in this crate; values are exclusively
//! owned by their caller, so any number of conversions may run concurrently
//! without synchronization.

pub mod bind;
pub mod row;
pub mod types;

pub use bind::{declared_sql_type, FromStorage, FromValue, Numeric, StoragePrimitive, ToStorage};
pub use row::{bind_params, BindColumn, Params, Row};
pub use types::{StorageClass, Value};
