//! # Error Types — Category Source Failures
//!
//! Every variant here is fatal to a pgconf run: a category file that cannot
//! be read, parsed, or interpreted cannot be reconciled safely, so the
//! driver reports the error and exits without producing output.

use thiserror::Error;

/// Error loading the category declaration file.
#[derive(Error, Debug)]
pub enum CategoryError {
    /// The category file does not exist.
    #[error("YAML file not found at {path}")]
    NotFound {
        /// Path that was looked up.
        path: String,
    },

    /// The category file exists but could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The category file is not well-formed YAML.
    #[error("error parsing YAML file {path}: {reason}")]
    Parse {
        /// Path of the malformed document.
        path: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The required top-level key is absent or is not a mapping.
    #[error("'{key}' key not found or not a dictionary in {path}")]
    MissingKey {
        /// Path of the document.
        path: String,
        /// The key that was expected.
        key: &'static str,
    },

    /// A category entry has the wrong shape.
    #[error("invalid category '{category}' in {path}: {reason}")]
    InvalidEntry {
        /// Path of the document.
        path: String,
        /// Category name (or a rendering of the offending key).
        category: String,
        /// What was wrong with it.
        reason: String,
    },
}
