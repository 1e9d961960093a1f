//! # pgconf CLI entry point
//!
//! Parses command-line arguments, initializes logging, and runs the
//! reconcile-and-generate pipeline.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pgconf_cli::pipeline::{run_generate, GenerateArgs};

/// Compare PostgreSQL settings and generate a categorized schema file.
#[derive(Parser, Debug)]
#[command(name = "pgconf", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    args: GenerateArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(host = %cli.args.host, port = cli.args.port, "pgconf starting");

    match run_generate(&cli.args).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const REQUIRED: [&str; 7] = ["pgconf", "-d", "postgres", "-u", "admin", "-p", "secret"];

    #[test]
    fn cli_parse_required_only_uses_defaults() {
        let cli = Cli::try_parse_from(REQUIRED).unwrap();
        assert_eq!(cli.args.dbname, "postgres");
        assert_eq!(cli.args.user, "admin");
        assert_eq!(cli.args.password, "secret");
        assert_eq!(cli.args.host, "localhost");
        assert_eq!(cli.args.port, 5432);
        assert_eq!(cli.args.yaml_file, PathBuf::from("source/parameters.yaml"));
        assert_eq!(
            cli.args.output_schema_file,
            PathBuf::from("source/postgresql.conf.yaml")
        );
        assert!(!cli.args.check);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parse_long_flags() {
        let cli = Cli::try_parse_from([
            "pgconf",
            "--dbname",
            "app",
            "--user",
            "reader",
            "--password",
            "pw",
            "--host",
            "10.0.0.5",
            "--port",
            "6432",
            "--yaml-file",
            "cats.yaml",
            "--output-schema-file",
            "out.yaml",
            "--check",
        ])
        .unwrap();
        assert_eq!(cli.args.host, "10.0.0.5");
        assert_eq!(cli.args.port, 6432);
        assert_eq!(cli.args.yaml_file, PathBuf::from("cats.yaml"));
        assert_eq!(cli.args.output_schema_file, PathBuf::from("out.yaml"));
        assert!(cli.args.check);
    }

    #[test]
    fn cli_parse_short_host_and_port() {
        let mut argv = REQUIRED.to_vec();
        argv.extend(["-H", "db", "-P", "5433"]);
        let cli = Cli::try_parse_from(argv).unwrap();
        assert_eq!(cli.args.host, "db");
        assert_eq!(cli.args.port, 5433);
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let mut argv = REQUIRED.to_vec();
        argv.push("-vv");
        let cli = Cli::try_parse_from(argv).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parse_missing_required_errors() {
        assert!(Cli::try_parse_from(["pgconf", "-d", "postgres", "-u", "admin"]).is_err());
        assert!(Cli::try_parse_from(["pgconf"]).is_err());
    }

    #[test]
    fn cli_parse_invalid_port_errors() {
        let mut argv = REQUIRED.to_vec();
        argv.extend(["-P", "not-a-port"]);
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
