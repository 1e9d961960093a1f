//! # Reconcile-and-Generate Pipeline
//!
//! Drives the stages in order: read live settings, load categories,
//! reconcile, and only on full agreement generate, self-check, and write the
//! schema. A mismatch is reported and yields exit code 1 without touching
//! the output file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use pgconf_catalog::connection::{DEFAULT_HOST, DEFAULT_PORT};
use pgconf_catalog::{fetch_settings, ConnectionConfig};
use pgconf_core::{reconcile, CategoryMap, SettingsCatalog};
use pgconf_schema::{check_document, generate_schema, write_schema};

use crate::report::{render_mismatch, IN_SYNC_LINE, RESULTS_HEADER};

/// Default location of the category file.
pub const DEFAULT_CATEGORY_FILE: &str = "source/parameters.yaml";

/// Default location of the generated schema.
pub const DEFAULT_OUTPUT_FILE: &str = "source/postgresql.conf.yaml";

/// Command-line arguments.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Database name.
    #[arg(short = 'd', long)]
    pub dbname: String,

    /// Database user.
    #[arg(short = 'u', long)]
    pub user: String,

    /// Database password.
    #[arg(short = 'p', long)]
    pub password: String,

    /// Database host.
    #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Database port.
    #[arg(short = 'P', long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path to the parameters.yaml category file.
    #[arg(long, default_value = DEFAULT_CATEGORY_FILE)]
    pub yaml_file: PathBuf,

    /// Path to the output schema file.
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_schema_file: PathBuf,

    /// Reconcile and report only; never write the schema file.
    #[arg(long)]
    pub check: bool,
}

impl GenerateArgs {
    /// Connection parameters for the settings source.
    pub fn connection(&self) -> ConnectionConfig {
        ConnectionConfig::new(&self.dbname, &self.user, &self.password)
            .with_host(&self.host)
            .with_port(self.port)
    }

    /// Where to write the schema, or `None` in check mode.
    pub fn output(&self) -> Option<&Path> {
        (!self.check).then_some(self.output_schema_file.as_path())
    }
}

/// Execute the full pipeline against a live server.
pub async fn run_generate(args: &GenerateArgs) -> Result<u8> {
    println!("--- Comparing PostgreSQL settings ---");
    println!("Connecting to {}:{}...", args.host, args.port);

    let settings = fetch_settings(&args.connection())
        .await
        .context("failed to read PostgreSQL settings")?;
    println!(
        "Found {} configurable settings in the database.",
        settings.len()
    );

    reconcile_and_generate(&settings, &args.yaml_file, args.output())
}

/// Everything after the settings have been fetched.
///
/// Returns `Ok(0)` when in sync (writing the schema if `output` is set) and
/// `Ok(1)` on a mismatch. Any other failure is an `Err`.
pub fn reconcile_and_generate(
    settings: &SettingsCatalog,
    category_file: &Path,
    output: Option<&Path>,
) -> Result<u8> {
    println!("Loading settings from {}...", category_file.display());
    let categories = CategoryMap::load(category_file).context("failed to load category file")?;
    println!(
        "Found {} settings in {} categories in the YAML file.",
        categories.declared_names().len(),
        categories.len()
    );

    let comparison = reconcile(settings, &categories);

    println!("\n{RESULTS_HEADER}");
    if !comparison.is_in_sync() {
        print!("{}", render_mismatch(&comparison));
        tracing::debug!(
            declared_but_absent = comparison.declared_but_absent.len(),
            present_but_undeclared = comparison.present_but_undeclared.len(),
            "settings and categories differ"
        );
        return Ok(1);
    }
    println!("{IN_SYNC_LINE}");

    let Some(output) = output else {
        return Ok(0);
    };

    println!("Generating categorized schema for {}...", output.display());
    let generated = generate_schema(settings, &categories);
    check_document(&generated.document).context("refusing to write schema")?;
    write_schema(&generated.document, output)?;
    println!("✓ Successfully generated {}.", output.display());

    if !generated.warnings.is_empty() {
        println!(
            "  {} value(s) could not be converted and were omitted; see warnings above.",
            generated.warnings.len()
        );
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> GenerateArgs {
        GenerateArgs {
            dbname: "postgres".into(),
            user: "admin".into(),
            password: "secret".into(),
            host: "db.internal".into(),
            port: 6432,
            yaml_file: PathBuf::from(DEFAULT_CATEGORY_FILE),
            output_schema_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            check: false,
        }
    }

    #[test]
    fn connection_uses_all_arguments() {
        let conn = args().connection();
        assert_eq!(conn.target(), "db.internal:6432/postgres");
        assert_eq!(conn.user, "admin");
        assert_eq!(conn.password, "secret");
    }

    #[test]
    fn check_mode_has_no_output() {
        let mut a = args();
        assert_eq!(a.output(), Some(Path::new(DEFAULT_OUTPUT_FILE)));
        a.check = true;
        assert_eq!(a.output(), None);
    }
}
