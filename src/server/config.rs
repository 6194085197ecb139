use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

pub struct Config {
    pub database_url: String,

    pub bind_address: SocketAddr,

    /// Browser origin allowed to call the API with credentials. CORS is disabled when unset.
    pub cors_allowed_origin: Option<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let cors_allowed_origin = match std::env::var("CORS_ALLOWED_ORIGIN") {
            Ok(origin) => Some(HeaderValue::from_str(&origin).map_err(|e| {
                ConfigError::InvalidEnvVar {
                    name: "CORS_ALLOWED_ORIGIN".to_string(),
                    reason: e.to_string(),
                }
            })?),
            Err(_) => None,
        };

        Ok(Self {
            database_url,
            bind_address,
            cors_allowed_origin,
        })
    }
}
