//! # Schema Errors and Warnings
//!
//! [`SchemaError`] is fatal: the document could not be serialized, did not
//! compile as a JSON Schema, or could not be written. [`ConversionError`] is
//! not; it travels inside a [`ConversionWarning`] and only causes one
//! optional field of one property to be omitted.

use std::fmt;

use thiserror::Error;

/// Fatal error producing or persisting the schema document.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The document could not be rendered.
    #[error("failed to serialize schema document: {0}")]
    Serialize(String),

    /// The generated document is not a usable JSON Schema.
    #[error("generated schema is not a valid JSON Schema: {reason}")]
    Invalid {
        /// Compiler diagnostic.
        reason: String,
    },

    /// The output path could not be written.
    #[error("error writing to {path}: {source}")]
    Write {
        /// Output path.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// A textual catalog value that does not parse as its declared type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Expected an integer.
    #[error("'{raw}' is not a valid integer: {reason}")]
    InvalidInteger {
        /// The offending text.
        raw: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// Expected a real number.
    #[error("'{raw}' is not a valid real number: {reason}")]
    InvalidReal {
        /// The offending text.
        raw: String,
        /// Parser diagnostic.
        reason: String,
    },
}

impl ConversionError {
    /// The catalog text that failed to convert.
    pub fn raw(&self) -> &str {
        match self {
            Self::InvalidInteger { raw, .. } | Self::InvalidReal { raw, .. } => raw,
        }
    }
}

/// Which optional property field a conversion failure affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningField {
    Default,
    Minimum,
    Maximum,
}

impl fmt::Display for WarningField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Minimum => write!(f, "minimum"),
            Self::Maximum => write!(f, "maximum"),
        }
    }
}

/// Non-fatal conversion failure for one field of one parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionWarning {
    /// Parameter name.
    pub parameter: String,
    /// The field that was omitted.
    pub field: WarningField,
    /// Why the value was rejected.
    pub error: ConversionError,
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not convert {} for setting '{}': {}",
            self.field, self.parameter, self.error
        )
    }
}
