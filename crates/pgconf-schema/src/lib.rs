//! # pgconf-schema — Categorized Settings Schema
//!
//! Turns a reconciled set of live settings and their category grouping into
//! a nested JSON-Schema document, checks that the document compiles, and
//! writes it as YAML.
//!
//! ## Document shape
//!
//! ```yaml
//! type: object
//! description: Schema for PostgreSQL configuration settings (postgresql.conf), grouped by category.
//! properties:
//!   memory:
//!     type: object
//!     description: Settings for the memory category.
//!     properties:
//!       shared_buffers:
//!         type: integer
//!         description: 'Sets the number of shared memory buffers used by the server. (Unit: 8kB)'
//!         default: 16384
//!         minimum: 16
//!         maximum: 1073741823
//! ```
//!
//! ## Determinism
//!
//! Categories keep the order of the category file. Properties within a
//! category are sorted lexicographically. Property fields always serialize
//! in the same order. Two runs over unchanged inputs produce identical bytes.
//!
//! ## Non-fatal conversions
//!
//! A default or bound that cannot be converted to its native type is left
//! out of the property and reported as a [`ConversionWarning`]; generation
//! of the rest of the document continues.

pub mod document;
pub mod error;
pub mod generate;
pub mod sink;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use document::{
    CategorySchema, CategorySchemas, JsonType, PropertyDescriptor, SchemaDocument, SchemaValue,
};
pub use error::{ConversionError, ConversionWarning, SchemaError, WarningField};
pub use generate::{describe_parameter, generate_schema, GeneratedSchema};
pub use sink::{to_yaml, write_schema};
pub use validate::{check_document, compile};
