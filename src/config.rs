//! Runtime configuration read from the process environment.
//!
//! `main` loads an optional `.env` file first, so every variable below can
//! also be set there.
//!
//! - `DATABASE_URL` (default `postgres://localhost/acme_hr_directory`)
//! - `HOST` (default `0.0.0.0`)
//! - `PORT` (default `3000`)
//! - `DB_MAX_CONNECTIONS` (default `1`)
//! - `APP_ENV`: `development` or `production` (default `production`).
//!   Only `development` wipes and reseeds the database on start.

use std::env;
use std::fmt;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/acme_hr_directory";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub app_env: AppEnv,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value {:?} for {}", self.value, self.key)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError { key: "DB_MAX_CONNECTIONS", value: raw }),
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let app_env = match get("APP_ENV") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "development" | "dev" => AppEnv::Development,
                "production" | "prod" => AppEnv::Production,
                _ => return Err(ConfigError { key: "APP_ENV", value: raw }),
            },
            None => AppEnv::Production,
        };

        Ok(Config {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            max_connections,
            app_env,
        })
    }

    pub fn bootstrap_enabled(&self) -> bool {
        self.app_env == AppEnv::Development
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr(), ("0.0.0.0".to_string(), 3000));
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.app_env, AppEnv::Production);
        assert!(!config.bootstrap_enabled());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://db:5432/hr"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DB_MAX_CONNECTIONS", "4"),
            ("APP_ENV", "Development"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "postgres://db:5432/hr");
        assert_eq!(config.bind_addr(), ("127.0.0.1".to_string(), 8080));
        assert_eq!(config.max_connections, 4);
        assert!(config.bootstrap_enabled());
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", ""), ("DATABASE_URL", "  ")]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config_from(&[("PORT", "http")]).unwrap_err(),
            ConfigError { key: "PORT", value: "http".to_string() }
        );
        assert_eq!(config_from(&[("DB_MAX_CONNECTIONS", "0")]).unwrap_err().key, "DB_MAX_CONNECTIONS");
        assert_eq!(config_from(&[("APP_ENV", "staging")]).unwrap_err().key, "APP_ENV");
    }
}
