use crate::error::{Result as ServerErrorResult, ServerError};

use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:8080)
    pub bind_addr: SocketAddr,

    /// SQLite database file (default: farofino.db)
    pub database_path: PathBuf,

    /// JWT secret for HS256 validation
    pub jwt_secret: Option<String>,

    /// Path to a JWT public key for RS256 validation (PEM format)
    pub jwt_public_key_path: Option<PathBuf>,

    /// Log level (default: info)
    pub log_level: log::LevelFilter,

    /// Enable colored logs (default: true)
    pub log_colored: bool,

    /// Optional log file; stdout when unset
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let log_level = std::env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .parse()
            .map_err(|_| ServerError::EnvVar {
                message: "LOG_LEVEL must be one of off, error, warn, info, debug, trace"
                    .to_string(),
            })?;

        let config = Self {
            bind_addr,

            database_path: std::env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("farofino.db")),

            jwt_secret: std::env::var("JWT_SECRET").ok(),

            jwt_public_key_path: std::env::var("JWT_PUBLIC_KEY_PATH").ok().map(PathBuf::from),

            log_level,

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),

            log_file: std::env::var("LOG_FILE").ok().map(PathBuf::from),
        };

        config.validate();

        Ok(config)
    }

    /// Whether bearer-token authentication is configured
    pub fn auth_enabled(&self) -> bool {
        self.jwt_secret.is_some() || self.jwt_public_key_path.is_some()
    }

    fn validate(&self) {
        if self.jwt_secret.is_some() && self.jwt_public_key_path.is_some() {
            log::warn!(
                "Both JWT_SECRET and JWT_PUBLIC_KEY_PATH provided, using JWT_SECRET (HS256)"
            );
        }
    }
}
