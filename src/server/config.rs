use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 168;
const DEFAULT_LLM_SERVICE_URL: &str = "http://llm-service:8000";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3001";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_FILTER: &str = "info";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,

    pub llm_service_url: String,
    pub core_api_secret: String,

    pub frontend_url: String,
    pub port: u16,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` passes `std::env::var`; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };
        let optional =
            |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_hours: parsed(
                "JWT_EXPIRATION_HOURS",
                lookup("JWT_EXPIRATION_HOURS"),
                DEFAULT_JWT_EXPIRATION_HOURS,
            )?,
            llm_service_url: optional("LLM_SERVICE_URL", DEFAULT_LLM_SERVICE_URL)
                .trim_end_matches('/')
                .to_string(),
            core_api_secret: optional("CORE_API_SECRET", ""),
            frontend_url: optional("FRONTEND_URL", DEFAULT_FRONTEND_URL),
            port: parsed("PORT", lookup("PORT"), DEFAULT_PORT)?,
            log_filter: optional("RUST_LOG", DEFAULT_LOG_FILTER),
        })
    }

    /// Origins accepted by CORS: the configured frontend plus the local dev ports.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins = vec![self.frontend_url.clone()];
        for local in ["http://localhost:3000", "http://localhost:3001"] {
            if !origins.iter().any(|origin| origin == local) {
                origins.push(local.to_string());
            }
        }
        origins
    }
}

fn parsed<T: FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
