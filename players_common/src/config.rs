//! Environment configuration.
//!
//! Both services read their settings from process environment variables,
//! optionally seeded from a `.env` file in the working directory. Values
//! already present in the environment take precedence over the file.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::UNSPECIFIED;
pub const DEFAULT_PORT: u16 = 4000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set in the environment")]
    Missing(&'static str),

    #[error("{var} is not in the correct format: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Outcome of reading an environment file, kept so it can be logged once
/// the subscriber exists.
pub type DotenvResult = Result<PathBuf, dotenvy::Error>;

/// Load `.env` from the working directory (or a parent) if there is one.
pub fn load_dotenv() -> DotenvResult {
    dotenvy::dotenv()
}

pub fn load_dotenv_from(path: &Path) -> DotenvResult {
    dotenvy::from_path(path).map(|()| path.to_path_buf())
}

/// A missing file is not an error.
pub fn log_dotenv(result: &DotenvResult) {
    match result {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded environment file"),
        Err(err) if err.not_found() => tracing::debug!("no .env file found"),
        Err(err) => tracing::warn!(error = %err, "failed to read .env file"),
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Where the HTTP listener binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: Ipv4Addr,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// `HOST` and `PORT` are optional; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match non_empty(lookup("HOST")) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "HOST", value })?,
            None => DEFAULT_HOST,
        };

        let port = match non_empty(lookup("PORT")) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

/// Connection settings for the persistent service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub dsn: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let dsn = non_empty(lookup("DB_DSN")).ok_or(ConfigError::Missing("DB_DSN"))?;
        Ok(Self { dsn })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn server_defaults_to_port_4000() {
        let config = ServerConfig::from_lookup(vars(&[])).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, Ipv4Addr::UNSPECIFIED);
        assert_eq!(config.addr().to_string(), "0.0.0.0:4000");
    }

    #[test]
    fn server_reads_host_and_port() {
        let config =
            ServerConfig::from_lookup(vars(&[("HOST", "127.0.0.1"), ("PORT", "8080")])).unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn empty_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(vars(&[("PORT", "")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = ServerConfig::from_lookup(vars(&[("PORT", "abc")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "PORT",
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn env_file_values_reach_the_environment() {
        let dir = std::env::temp_dir().join(format!("players-common-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.env");
        std::fs::write(&path, "PLAYERS_COMMON_CONFIG_TEST_PORT=4321\n").unwrap();

        let loaded = load_dotenv_from(&path).unwrap();
        assert_eq!(loaded, path);
        assert_eq!(
            std::env::var("PLAYERS_COMMON_CONFIG_TEST_PORT").as_deref(),
            Ok("4321")
        );
    }

    #[test]
    fn missing_env_file_is_not_found() {
        let err = load_dotenv_from(Path::new("/nonexistent/players/.env")).unwrap_err();
        assert!(err.not_found());
    }

    #[test]
    fn dsn_is_required() {
        assert_eq!(
            DatabaseConfig::from_lookup(vars(&[])).unwrap_err(),
            ConfigError::Missing("DB_DSN")
        );
        assert_eq!(
            DatabaseConfig::from_lookup(vars(&[("DB_DSN", "  ")])).unwrap_err(),
            ConfigError::Missing("DB_DSN")
        );

        let config = DatabaseConfig::from_lookup(vars(&[("DB_DSN", "sqlite::memory:")])).unwrap();
        assert_eq!(config.dsn, "sqlite::memory:");
    }
}
