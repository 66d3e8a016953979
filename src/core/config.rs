//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use super::error::ConfigError;

/// Env var overriding the Leptos `site-addr`
pub const ADDR_VAR: &str = "SMART_SAVER_ADDR";
/// Env var holding the tracing filter directive
pub const LOG_VAR: &str = "SMART_SAVER_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address to bind instead of the one in `[package.metadata.leptos]`.
    /// Example: 0.0.0.0:8080
    pub addr: Option<SocketAddr>,

    /// `tracing` filter directive, e.g. `info,tower_http=debug`
    pub log_filter: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = match lookup(ADDR_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(raw.trim().parse::<SocketAddr>().map_err(|source| {
                ConfigError::InvalidAddr {
                    value: raw.clone(),
                    source,
                }
            })?),
            None => None,
        };

        let log_filter = lookup(LOG_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self { addr, log_filter })
    }

    /// Check if the bind address is overridden
    pub fn has_addr_override(&self) -> bool {
        self.addr.is_some()
    }

    /// Address to bind, falling back to `default`
    pub fn bind_addr(&self, default: SocketAddr) -> SocketAddr {
        self.addr.unwrap_or(default)
    }

    /// Build the tracing filter from `log_filter`
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter).map_err(|source| ConfigError::InvalidLogFilter {
            value: self.log_filter.clone(),
            source,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_with_no_vars() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert!(!config.has_addr_override());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = Config::from_lookup(lookup_from(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (LOG_VAR, "debug,tower_http=trace"),
        ]))
        .unwrap();

        assert_eq!(config.addr, Some("0.0.0.0:8080".parse().unwrap()));
        assert_eq!(config.log_filter, "debug,tower_http=trace");
        assert!(config.has_addr_override());
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config =
            Config::from_lookup(lookup_from(&[(ADDR_VAR, "  "), (LOG_VAR, "")])).unwrap();

        assert!(config.addr.is_none());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_invalid_addr_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[(ADDR_VAR, "localhost")])).unwrap_err();

        assert!(matches!(err, ConfigError::InvalidAddr { ref value, .. } if value == "localhost"));
        assert!(err.to_string().contains("SMART_SAVER_ADDR"));
    }

    #[test]
    fn test_bind_addr_prefers_override() {
        let default: SocketAddr = "127.0.0.1:3000".parse().unwrap();
        let with = Config {
            addr: Some("0.0.0.0:8080".parse().unwrap()),
            ..Config::default()
        };

        assert_eq!(with.bind_addr(default), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(Config::default().bind_addr(default), default);
    }

    #[test]
    fn test_env_filter_accepts_valid_directive() {
        let config = Config {
            log_filter: "info,smart_saver_web=debug".to_string(),
            ..Config::default()
        };

        assert!(config.env_filter().is_ok());
    }

    #[test]
    fn test_env_filter_rejects_garbage() {
        let config = Config {
            log_filter: "smart_saver_web=loudest".to_string(),
            ..Config::default()
        };

        assert!(matches!(
            config.env_filter(),
            Err(ConfigError::InvalidLogFilter { .. })
        ));
    }
}
