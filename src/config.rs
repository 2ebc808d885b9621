//! Runtime configuration from the environment (optionally a `.env` file).

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_RENDER_BUDGET_MS: u64 = 400;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind: SocketAddr,
    /// `None` runs against the in-memory repository.
    pub database_url: Option<String>,
    /// Where the dashboard sends its REST requests.
    pub api_base: String,
    pub render_budget: Duration,
    pub cache_ttl: Duration,
    pub seed_demo: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source. Unset and blank variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_raw = get("FLEETDASH_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_raw.parse().map_err(|_| ConfigError::Invalid {
            var: "FLEETDASH_BIND",
            expected: "socket address",
            value: bind_raw.clone(),
        })?;

        let api_base = get("FLEETDASH_API_BASE").unwrap_or_else(|| format!("http://{bind}"));
        if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
            return Err(ConfigError::Invalid {
                var: "FLEETDASH_API_BASE",
                expected: "http(s) URL",
                value: api_base,
            });
        }

        let millis = parse_u64(
            get("FLEETDASH_RENDER_BUDGET_MS"),
            "FLEETDASH_RENDER_BUDGET_MS",
            DEFAULT_RENDER_BUDGET_MS,
        )?;
        let secs = parse_u64(
            get("FLEETDASH_CACHE_TTL_SECS"),
            "FLEETDASH_CACHE_TTL_SECS",
            DEFAULT_CACHE_TTL_SECS,
        )?;
        let seed_demo = parse_bool(get("FLEETDASH_SEED_DEMO"), "FLEETDASH_SEED_DEMO", true)?;

        Ok(Self {
            bind,
            database_url: get("DATABASE_URL"),
            api_base,
            render_budget: Duration::from_millis(millis),
            cache_ttl: Duration::from_secs(secs),
            seed_demo,
        })
    }
}

fn parse_u64(raw: Option<String>, var: &'static str, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            var,
            expected: "non-negative integer",
            value,
        }),
    }
}

fn parse_bool(raw: Option<String>, var: &'static str, default: bool) -> Result<bool, ConfigError> {
    match raw.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(default),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(_) => Err(ConfigError::Invalid {
            var,
            expected: "boolean",
            value: raw.unwrap_or_default(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).expect("config");
        assert_eq!(cfg.bind.to_string(), DEFAULT_BIND);
        assert_eq!(cfg.api_base, "http://127.0.0.1:8080");
        assert_eq!(cfg.database_url, None);
        assert_eq!(cfg.render_budget, Duration::from_millis(400));
        assert_eq!(cfg.cache_ttl, Duration::from_secs(30));
        assert!(cfg.seed_demo);
    }

    #[test]
    fn api_base_follows_bind() {
        let cfg = config(&[("FLEETDASH_BIND", "0.0.0.0:9000")]).expect("config");
        assert_eq!(cfg.api_base, "http://0.0.0.0:9000");
    }

    #[test]
    fn overrides() {
        let cfg = config(&[
            ("DATABASE_URL", "postgres://localhost/fleet"),
            ("FLEETDASH_API_BASE", "https://api.example.co"),
            ("FLEETDASH_RENDER_BUDGET_MS", "50"),
            ("FLEETDASH_SEED_DEMO", "off"),
        ])
        .expect("config");
        assert_eq!(cfg.database_url.as_deref(), Some("postgres://localhost/fleet"));
        assert_eq!(cfg.api_base, "https://api.example.co");
        assert_eq!(cfg.render_budget, Duration::from_millis(50));
        assert!(!cfg.seed_demo);
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(matches!(
            config(&[("FLEETDASH_BIND", "localhost")]),
            Err(ConfigError::Invalid { var: "FLEETDASH_BIND", .. })
        ));
        assert!(config(&[("FLEETDASH_CACHE_TTL_SECS", "-1")]).is_err());
        assert!(config(&[("FLEETDASH_SEED_DEMO", "maybe")]).is_err());
        assert!(config(&[("FLEETDASH_API_BASE", "ftp://x")]).is_err());
    }

    #[test]
    fn blank_means_unset() {
        let cfg = config(&[("DATABASE_URL", "  ")]).expect("config");
        assert_eq!(cfg.database_url, None);
    }
}
