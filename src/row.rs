//! # Statement and Row Seam
//!
//! The two directions values cross the engine boundary:
//!
//! - [`Params`] collects typed bind parameters for a prepared statement and
//!   drives them through any [`BindColumn`] statement binder.
//! - [`Row`] holds the tagged values read back for one result row and
//!   decodes them into native types on request.
//!
//! Both sides own their values outright; nothing here aliases engine
//! buffers, so a `Row` stays valid after the cursor advances.
//!
//! ## Usage
//!
//! ```ignore
//! let mut params = Params::new();
//! params.push(7i64);
//! params.push("alice");
//! bind_params(&mut stmt, params)?;
//!
//! let row = stmt.step()?;
//! let id: i64 = row.decode(0)?;
//! let name: String = row.decode(1)?;
//! ```

use crate::bind::{FromValue, ToStorage};
use crate::types::{StorageClass, Value};
use eyre::{bail, Result, WrapErr};
use smallvec::SmallVec;

/// One result row, as tagged engine values.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Returns the tagged value at `index`, or None when out of bounds.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Returns the storage class present at `index`, for precondition checks
    /// before decoding.
    pub fn kind(&self, index: usize) -> Option<StorageClass> {
        self.values.get(index).map(Value::kind)
    }

    /// Decodes the column at `index` into a native type.
    pub fn decode<T: FromValue>(&self, index: usize) -> Result<T> {
        match self.values.get(index) {
            Some(value) => T::from_value(value.clone())
                .wrap_err_with(|| format!("failed to decode column {}", index)),
            None => bail!("column {} out of bounds", index),
        }
    }

    pub fn column_count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the row, yielding its values in column order.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

/// Ordered bind-parameter list for one statement execution.
///
/// Inline storage covers typical statements without a heap allocation.
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: SmallVec<[Value; 8]>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a typed parameter, converting it to its storage form.
    pub fn push<T: ToStorage>(&mut self, value: T) {
        self.values.push(value.into_value());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates the parameters in bind order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }
}

/// Statement binder exposed by the engine-binding layer.
///
/// Parameter indexes are 1-based, matching the engine's bind API. Engine
/// failures are propagated unchanged.
pub trait BindColumn {
    fn bind_value(&mut self, index: usize, value: Value) -> Result<()>;
}

/// Binds every parameter in order through `binder`.
pub fn bind_params<B: BindColumn>(binder: &mut B, params: Params) -> Result<()> {
    for (i, value) in params.values.into_iter().enumerate() {
        let index = i + 1;
        binder
            .bind_value(index, value)
            .wrap_err_with(|| format!("failed to bind parameter {}", index))?;
    }
    Ok(())
}
