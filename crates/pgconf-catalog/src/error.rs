//! Settings source error types.

/// Errors from reading the settings catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The server was unreachable or rejected the credentials.
    #[error("database connection error ({target}): {source}")]
    Connect {
        /// `host:port/dbname` of the attempted connection.
        target: String,
        source: sqlx::Error,
    },
    /// The connection succeeded but the catalog query failed.
    #[error("pg_settings query failed: {source}")]
    Query { source: sqlx::Error },
}
