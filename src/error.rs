//! Error types for value conversion and strict configuration.
//!
//! Rendering itself never fails: missing data degrades to empty cells and
//! omitted sections. Errors only arise at the edges:
//!
//! - **Value conversion**: [`to_value`](crate::to_value) met a type it cannot
//!   represent (e.g. enum variants carrying data, non-string map keys)
//! - **Strict configuration**: [`TableConfig::try_from_value`](crate::TableConfig::try_from_value)
//!   found a field with the wrong shape
//!
//! ```rust
//! use html_table::{value, Error, TableConfig};
//!
//! let err = TableConfig::try_from_value(&value!({ "columns": 5 })).unwrap_err();
//! assert!(matches!(err, Error::InvalidField { .. }));
//! assert!(err.to_string().contains("columns"));
//! ```

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// A configuration field has the wrong shape
    #[error("Invalid configuration field `{field}`: expected {expected}, found {found}")]
    InvalidField {
        field: String,
        expected: String,
        found: String,
    },

    /// Unsupported type for value conversion
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid-field error for strict configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use html_table::Error;
    ///
    /// let err = Error::invalid_field("items", "array or object", "string");
    /// assert!(err.to_string().contains("expected array or object"));
    /// ```
    pub fn invalid_field(field: &str, expected: &str, found: &str) -> Self {
        Error::InvalidField {
            field: field.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
