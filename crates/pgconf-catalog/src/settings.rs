//! `pg_settings` query and row mapping.

use pgconf_core::{ParameterRecord, SettingsCatalog, VarType};
use sqlx::{Connection, PgConnection};

use crate::connection::ConnectionConfig;
use crate::error::CatalogError;

/// Every parameter whose context is not `internal`.
pub const SETTINGS_QUERY: &str = "SELECT name, short_desc, vartype, unit, min_val, max_val, enumvals, reset_val
     FROM pg_settings
     WHERE context <> 'internal'";

/// Fetch all non-internal settings from the server described by `config`.
///
/// The connection is closed before the rows are converted, whether or not
/// the query succeeded.
///
/// # Errors
///
/// Returns [`CatalogError::Connect`] if the server cannot be reached or
/// rejects the credentials, and [`CatalogError::Query`] if the query fails.
pub async fn fetch_settings(config: &ConnectionConfig) -> Result<SettingsCatalog, CatalogError> {
    tracing::info!(server = %config.target(), "connecting to PostgreSQL");

    let mut conn = PgConnection::connect_with(&config.connect_options())
        .await
        .map_err(|source| CatalogError::Connect {
            target: config.target(),
            source,
        })?;

    let rows = sqlx::query_as::<_, SettingRow>(SETTINGS_QUERY)
        .fetch_all(&mut conn)
        .await;

    if let Err(e) = conn.close().await {
        tracing::debug!(error = %e, "error closing catalog connection");
    }

    let rows = rows.map_err(|source| CatalogError::Query { source })?;
    tracing::debug!(rows = rows.len(), "fetched pg_settings rows");

    Ok(into_catalog(rows))
}

fn into_catalog(rows: Vec<SettingRow>) -> SettingsCatalog {
    rows.into_iter()
        .map(SettingRow::into_record)
        .map(|record| (record.name.clone(), record))
        .collect()
}

/// Internal row type for SQLx mapping.
#[derive(Debug, sqlx::FromRow)]
struct SettingRow {
    name: String,
    short_desc: Option<String>,
    vartype: String,
    unit: Option<String>,
    min_val: Option<String>,
    max_val: Option<String>,
    enumvals: Option<Vec<String>>,
    reset_val: Option<String>,
}

impl SettingRow {
    fn into_record(self) -> ParameterRecord {
        ParameterRecord {
            name: self.name,
            short_description: self.short_desc.unwrap_or_default(),
            var_type: VarType::parse(&self.vartype),
            unit: self.unit,
            min_value: self.min_val,
            max_value: self.max_val,
            enum_values: self.enumvals,
            reset_value: self.reset_val,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, vartype: &str) -> SettingRow {
        SettingRow {
            name: name.to_string(),
            short_desc: Some(format!("{name} description")),
            vartype: vartype.to_string(),
            unit: None,
            min_val: None,
            max_val: None,
            enumvals: None,
            reset_val: None,
        }
    }

    #[test]
    fn row_maps_to_typed_record() {
        let mut r = row("shared_buffers", "integer");
        r.unit = Some("8kB".to_string());
        r.min_val = Some("16".to_string());
        r.max_val = Some("1073741823".to_string());
        r.reset_val = Some("16384".to_string());

        let rec = r.into_record();
        assert_eq!(rec.name, "shared_buffers");
        assert_eq!(rec.var_type, VarType::Integer);
        assert_eq!(rec.unit(), Some("8kB"));
        assert_eq!(rec.min_value.as_deref(), Some("16"));
        assert_eq!(rec.reset_value.as_deref(), Some("16384"));
    }

    #[test]
    fn null_description_becomes_empty() {
        let mut r = row("x", "bool");
        r.short_desc = None;
        assert_eq!(r.into_record().short_description, "");
    }

    #[test]
    fn enum_values_keep_server_order() {
        let mut r = row("log_min_messages", "enum");
        r.enumvals = Some(vec!["debug5".into(), "info".into(), "warning".into()]);
        let rec = r.into_record();
        assert_eq!(
            rec.enum_values.unwrap(),
            vec!["debug5".to_string(), "info".to_string(), "warning".to_string()]
        );
    }

    #[test]
    fn catalog_is_keyed_by_name() {
        let catalog = into_catalog(vec![row("work_mem", "integer"), row("jit", "bool")]);
        let names: Vec<&str> = catalog.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["jit", "work_mem"]);
        assert_eq!(catalog["jit"].var_type, VarType::Bool);
    }

    #[test]
    fn query_excludes_internal_context() {
        assert!(SETTINGS_QUERY.contains("FROM pg_settings"));
        assert!(SETTINGS_QUERY.contains("context <> 'internal'"));
    }

    #[tokio::test]
    async fn unreachable_server_is_connect_error() {
        // Port 1 on loopback has no listener.
        let config = ConnectionConfig::new("postgres", "nobody", "nothing")
            .with_host("127.0.0.1")
            .with_port(1);
        let err = fetch_settings(&config).await.unwrap_err();
        assert!(matches!(err, CatalogError::Connect { .. }));
        assert!(err.to_string().contains("127.0.0.1:1/postgres"));
        assert!(!err.to_string().contains("nothing"));
    }
}
