//! # pgconf-catalog — PostgreSQL Settings Source
//!
//! Reads every externally visible configuration parameter from the
//! `pg_settings` system view and returns them as typed
//! [`ParameterRecord`](pgconf_core::ParameterRecord)s.
//!
//! ## Connection model
//!
//! Exactly one connection is opened per call to [`fetch_settings`], used for
//! a single read-only query, and closed before the rows are converted. There
//! is no pool and no retry: a failed connection is reported to the caller
//! and the operator re-runs the tool.

pub mod connection;
pub mod error;
pub mod settings;

pub use connection::ConnectionConfig;
pub use error::CatalogError;
pub use settings::{fetch_settings, SETTINGS_QUERY};
