//! Runtime configuration, read from the process environment (and `.env`).

use std::time::Duration;

pub const DEFAULT_DB_URI: &str = "sqlite://app.db?mode=rwc";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5555;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
}

impl DbConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            connect_timeout: Duration::from_secs(8),
            idle_timeout: Duration::from_secs(60),
        }
    }

    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:")
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db: DbConfig,
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let db_uri = get("DB_URI").unwrap_or_else(|| DEFAULT_DB_URI.to_string());
        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let timeout_secs = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: "REQUEST_TIMEOUT_SECS",
                value: raw,
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            db: DbConfig::new(db_uri),
            host,
            port,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.db.url, DEFAULT_DB_URI);
        assert_eq!(cfg.port, 5555);
        assert_eq!(cfg.bind_addr(), "127.0.0.1:5555");
        assert_eq!(cfg.request_timeout, Duration::from_secs(30));
        assert!(!cfg.db.is_in_memory());
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("DB_URI", "sqlite::memory:"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert!(cfg.db.is_in_memory());
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
        assert_eq!(cfg.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn blank_db_uri_falls_back_to_default() {
        let cfg = AppConfig::from_lookup(lookup(&[("DB_URI", "  ")])).unwrap();
        assert_eq!(cfg.db.url, DEFAULT_DB_URI);
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "fifty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                key: "PORT",
                value: "fifty".to_string()
            }
        );
    }
}
