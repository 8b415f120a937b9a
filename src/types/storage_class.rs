//! # Storage Class Tags
//!
//! The storage engine holds exactly four shapes of data. `StorageClass` is
//! the single-byte tag naming which shape a value or column uses.
//!
//! ## Roles
//!
//! 1. **Schema generation**: `sql_name()` is the literal column type emitted
//!    into `CREATE TABLE` text.
//! 2. **Runtime kind tag**: the row reader reports the class present at a
//!    column index so callers can check extraction preconditions.
//!
//! The classification is advisory metadata. Runtime conversion dispatch is
//! selected by the native type the caller requests, never by inspecting the
//! class.
//!
//! ## Storage Encoding
//!
//! `#[repr(u8)]` keeps the discriminant to a single byte so the engine can
//! store it directly in record headers. `TryFrom<u8>` decodes a persisted
//! discriminant and rejects unknown values.

use eyre::Result;

/// Storage-level classification for engine values and declared columns.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageClass {
    Integer = 0,
    Real = 1,
    Text = 2,
    Blob = 3,
}

impl StorageClass {
    /// Returns the SQL type name used in generated schema declarations.
    pub const fn sql_name(self) -> &'static str {
        match self {
            StorageClass::Integer => "INTEGER",
            StorageClass::Real => "REAL",
            StorageClass::Text => "TEXT",
            StorageClass::Blob => "BLOB",
        }
    }
}

impl TryFrom<u8> for StorageClass {
    type Error = eyre::Report;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(StorageClass::Integer),
            1 => Ok(StorageClass::Real),
            2 => Ok(StorageClass::Text),
            3 => Ok(StorageClass::Blob),
            _ => eyre::bail!("invalid StorageClass discriminant: {}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sql_names_match_declared_column_text() {
        assert_eq!(StorageClass::Integer.sql_name(), "INTEGER");
        assert_eq!(StorageClass::Real.sql_name(), "REAL");
        assert_eq!(StorageClass::Text.sql_name(), "TEXT");
        assert_eq!(StorageClass::Blob.sql_name(), "BLOB");
    }

    #[test]
    fn discriminant_roundtrip() {
        for class in [
            StorageClass::Integer,
            StorageClass::Real,
            StorageClass::Text,
            StorageClass::Blob,
        ] {
            assert_eq!(StorageClass::try_from(class as u8).unwrap(), class);
        }
    }

    #[test]
    fn unknown_discriminant_is_rejected() {
        assert!(StorageClass::try_from(4).is_err());
        assert!(StorageClass::try_from(255).is_err());
    }
}
