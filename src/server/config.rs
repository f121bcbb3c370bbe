//! Environment configuration.

use std::str::FromStr;

use crate::server::error::config::ConfigError;

pub static DEFAULT_CATALOG_BASE_URL: &str = "https://www.swapi.tech/api";

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Bearer token lifetime in seconds
    pub jwt_expiry_secs: i64,
    pub catalog_base_url: String,
    /// Timeout for each outbound catalog request
    pub catalog_timeout_secs: u64,
    /// Maximum number of catalog detail requests in flight
    pub catalog_concurrency: usize,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads the configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a variable if set
    ///
    /// # Returns
    /// - `Ok(Config)`: Required variables are present and every value parses
    /// - `Err(ConfigError::MissingEnvVar)`: `DATABASE_URL` or `JWT_SECRET` is not set
    /// - `Err(ConfigError::InvalidEnvValue)`: A numeric variable failed to parse or is zero
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required =
            |var: &str| lookup(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()));

        let config = Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiry_secs: parse_or(&lookup, "JWT_EXPIRY_SECS", 3600)?,
            catalog_base_url: lookup("CATALOG_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_string()),
            catalog_timeout_secs: parse_or(&lookup, "CATALOG_TIMEOUT_SECS", 10)?,
            catalog_concurrency: parse_or(&lookup, "CATALOG_CONCURRENCY", 4)?,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
        };

        if config.jwt_expiry_secs <= 0 {
            return Err(invalid("JWT_EXPIRY_SECS", "must be greater than zero"));
        }
        if config.catalog_timeout_secs == 0 {
            return Err(invalid("CATALOG_TIMEOUT_SECS", "must be greater than zero"));
        }
        if config.catalog_concurrency == 0 {
            return Err(invalid("CATALOG_CONCURRENCY", "must be greater than zero"));
        }

        Ok(config)
    }
}

fn parse_or<T, F>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| invalid(var, &e.to_string())),
        None => Ok(default),
    }
}

fn invalid(var: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: reason.to_string(),
    }
}
