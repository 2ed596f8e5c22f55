//! Server configuration
//!
//! Read from the process environment (a `.env` file is loaded first when
//! present).

use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Configuration for the Chirp API server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
    /// PostgreSQL URL; `None` selects the in-memory backend
    pub database_url: Option<String>,
    /// Postgres pool size
    pub db_max_connections: u32,
    /// Whether users may follow themselves
    pub allow_self_follow: bool,
}

impl ServerConfig {
    /// Build configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(addr) = lookup("CHIRP_BIND_ADDR") {
            config.bind_addr = addr.parse().map_err(|_| ConfigError::InvalidValue {
                key: "CHIRP_BIND_ADDR",
                value: addr,
            })?;
        }

        config.database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        if let Some(max) = lookup("CHIRP_DB_MAX_CONNECTIONS") {
            config.db_max_connections = match max.parse() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "CHIRP_DB_MAX_CONNECTIONS",
                        value: max,
                    })
                }
            };
        }

        if let Some(flag) = lookup("CHIRP_ALLOW_SELF_FOLLOW") {
            config.allow_self_follow = parse_flag(&flag).ok_or(ConfigError::InvalidValue {
                key: "CHIRP_ALLOW_SELF_FOLLOW",
                value: flag,
            })?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            database_url: None,
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            allow_self_follow: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_use_in_memory_backend() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(config.database_url.is_none());
        assert!(config.allow_self_follow);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = config_from(&[
            ("CHIRP_BIND_ADDR", "127.0.0.1:3000"),
            ("DATABASE_URL", "postgres://localhost/chirp"),
            ("CHIRP_DB_MAX_CONNECTIONS", "12"),
            ("CHIRP_ALLOW_SELF_FOLLOW", "no"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/chirp")
        );
        assert_eq!(config.db_max_connections, 12);
        assert!(!config.allow_self_follow);
    }

    #[test]
    fn test_blank_database_url_means_in_memory() {
        let config = config_from(&[("DATABASE_URL", "  ")]).unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(config_from(&[("CHIRP_BIND_ADDR", "nowhere")]).is_err());
        assert!(config_from(&[("CHIRP_DB_MAX_CONNECTIONS", "0")]).is_err());
        assert!(config_from(&[("CHIRP_ALLOW_SELF_FOLLOW", "maybe")]).is_err());
    }
}
