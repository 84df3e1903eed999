use axum::http::HeaderValue;
use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173";
/// Row locks rely on `SELECT ... FOR UPDATE`, so only Postgres is accepted.
const SUPPORTED_DATABASE_SCHEMES: [&str; 2] = ["postgres://", "postgresql://"];

pub struct Config {
    pub database_url: String,

    pub bind_addr: SocketAddr,
    pub cors_origins: Vec<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of the named variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - Missing or non-Postgres `DATABASE_URL`, or an
    ///   unparsable `BIND_ADDR` / `CORS_ORIGINS` entry
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;
        if !SUPPORTED_DATABASE_SCHEMES
            .iter()
            .any(|scheme| database_url.starts_with(scheme))
        {
            return Err(ConfigError::InvalidEnvVar {
                name: "DATABASE_URL".to_string(),
                value: database_url,
                reason: "only postgres:// and postgresql:// connection strings are supported"
                    .to_string(),
            }
            .into());
        }

        let bind_addr_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr =
            bind_addr_raw
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "BIND_ADDR".to_string(),
                    value: bind_addr_raw.clone(),
                    reason: e.to_string(),
                })?;

        let cors_raw =
            lookup("CORS_ORIGINS").unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string());
        let cors_origins = cors_raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                    name: "CORS_ORIGINS".to_string(),
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            database_url,
            bind_addr,
            cors_origins,
        })
    }
}
