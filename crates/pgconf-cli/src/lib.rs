//! # pgconf-cli — PostgreSQL Settings Schema Tool
//!
//! Provides the `pgconf` command: read the live settings of a PostgreSQL
//! server, reconcile them against the category file, and, when the two
//! agree exactly, write the categorized JSON-schema document.
//!
//! ```bash
//! pgconf -d postgres -u admin -p secret
//! pgconf -d postgres -u admin -p secret -H db.internal -P 6432 \
//!     --yaml-file source/parameters.yaml \
//!     --output-schema-file source/postgresql.conf.yaml
//! pgconf -d postgres -u admin -p secret --check
//! ```
//!
//! ## Exit codes
//!
//! - `0` — settings and categories agree (and the schema was written, unless `--check`).
//! - `1` — any fatal error, or a mismatch between settings and categories.
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; reconciliation and generation are
//!   delegated to `pgconf-core` and `pgconf-schema`.
//! - Progress and the comparison report go to stdout; logs go to stderr.

pub mod pipeline;
pub mod report;
