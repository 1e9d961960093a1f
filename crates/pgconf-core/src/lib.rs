//! # pgconf-core — Foundational Types for pgconf
//!
//! This crate defines the data model shared by every stage of the pgconf
//! pipeline. It depends on nothing internal; the catalog, schema, and CLI
//! crates all build on it.
//!
//! ## Contents
//!
//! 1. **Parameter records.** [`ParameterRecord`] is one row of the live
//!    settings catalog with named, typed fields. [`VarType`] is the closed
//!    set of variable types with a forward-compatible `Other` variant.
//!
//! 2. **Category map.** [`CategoryMap`] is the operator-maintained grouping
//!    of parameter names, loaded from a YAML document with a top-level
//!    `categories` mapping. Declaration order of categories is preserved.
//!
//! 3. **Reconciliation.** [`reconcile`] computes the two sorted difference
//!    lists between the live parameter names and the declared names. Schema
//!    generation is gated on [`ComparisonResult::is_in_sync`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pgconf-*` crates (this is the leaf of the DAG).
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod category;
pub mod error;
pub mod reconcile;
pub mod record;

// Re-export primary types for ergonomic imports.
pub use category::{Category, CategoryMap, CATEGORIES_KEY};
pub use error::CategoryError;
pub use reconcile::{reconcile, ComparisonResult};
pub use record::{ParameterRecord, SettingsCatalog, VarType};
