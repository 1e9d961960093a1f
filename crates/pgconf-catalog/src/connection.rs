//! Connection parameters for the settings source.

use std::fmt;

use sqlx::postgres::PgConnectOptions;

/// Default server host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default server port.
pub const DEFAULT_PORT: u16 = 5432;

/// Where and as whom to connect.
#[derive(Clone)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl ConnectionConfig {
    /// Build a config for `database` on the default host and port.
    pub fn new(
        database: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: database.into(),
            user: user.into(),
            password: password.into(),
        }
    }

    /// Override the host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Override the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// `host:port/database`, for diagnostics. Never includes the password.
    pub fn target(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.database)
    }

    /// sqlx connect options for this config.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
            .application_name("pgconf")
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_localhost_5432() {
        let cfg = ConnectionConfig::new("postgres", "admin", "secret");
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 5432);
        assert_eq!(cfg.target(), "localhost:5432/postgres");
    }

    #[test]
    fn overrides_host_and_port() {
        let cfg = ConnectionConfig::new("db", "u", "p")
            .with_host("db.internal")
            .with_port(6432);
        assert_eq!(cfg.target(), "db.internal:6432/db");
    }

    #[test]
    fn connect_options_carry_all_fields() {
        let cfg = ConnectionConfig::new("app", "reader", "pw")
            .with_host("10.0.0.5")
            .with_port(5433);
        let opts = cfg.connect_options();
        assert_eq!(opts.get_host(), "10.0.0.5");
        assert_eq!(opts.get_port(), 5433);
        assert_eq!(opts.get_database(), Some("app"));
        assert_eq!(opts.get_username(), "reader");
    }

    #[test]
    fn debug_redacts_password() {
        let cfg = ConnectionConfig::new("db", "u", "hunter2");
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
