//! Runtime configuration read from the environment.

use crate::error::AppError;
use crate::state::security_config::{SecurityConfig, DEFAULT_AUDIENCE};

/// Which directory backend holds players and games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryConfig {
    /// In-process store; data lives as long as the process
    Memory,
    /// Managed REST backend
    Rest { base_url: String, api_key: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_audience: String,
    pub directory: DirectoryConfig,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match var("BACKEND_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got {raw:?}"))
            })?,
            None => 3001,
        };

        let jwt_secret =
            var("BACKEND_JWT_SECRET").ok_or_else(|| AppError::config("BACKEND_JWT_SECRET must be set"))?;
        let jwt_audience =
            var("BACKEND_JWT_AUDIENCE").unwrap_or_else(|| DEFAULT_AUDIENCE.to_string());

        let directory = match (var("TRIUNFO_DIRECTORY_URL"), var("TRIUNFO_DIRECTORY_KEY")) {
            (None, None) => DirectoryConfig::Memory,
            (Some(base_url), Some(api_key)) => {
                if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                    return Err(AppError::config(format!(
                        "TRIUNFO_DIRECTORY_URL must be an http(s) URL, got {base_url:?}"
                    )));
                }
                DirectoryConfig::Rest { base_url, api_key }
            }
            _ => {
                return Err(AppError::config(
                    "TRIUNFO_DIRECTORY_URL and TRIUNFO_DIRECTORY_KEY must be set together",
                ))
            }
        };

        let cors_origins = parse_origins(&var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        Ok(Self {
            host,
            port,
            jwt_secret,
            jwt_audience,
            directory,
            cors_origins,
        })
    }

    pub fn security(&self) -> SecurityConfig {
        SecurityConfig::new(self.jwt_secret.as_bytes()).with_audience(self.jwt_audience.clone())
    }
}

/// Comma-separated origins, lightly validated. Falls back to the local
/// frontend when nothing valid is configured.
pub fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
        ]
    } else {
        origins
    }
}
