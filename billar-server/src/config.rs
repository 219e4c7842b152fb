//! Server configuration

use crate::BoxError;

/// Server configuration, read once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL (file is created if missing)
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// CORS origins: `*` or a comma-separated list
    pub allow_origin: String,
    /// Directory holding the operator front end
    pub public_dir: String,
    /// Seed demo branches, tables, rates and products into an empty database
    pub seed_on_startup: bool,
    /// Environment: development | staging | production
    pub environment: String,
    /// Log filter when RUST_LOG is not set
    pub log_level: String,
    /// Daily rolling log file directory (stdout only when unset)
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://billar.db".into(),
            http_port: 8080,
            allow_origin: "*".into(),
            public_dir: "public".into(),
            seed_on_startup: true,
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let defaults = Self::default();

        let http_port = match std::env::var("HTTP_PORT") {
            Ok(p) => p
                .parse()
                .map_err(|_| format!("HTTP_PORT must be a port number, got '{p}'"))?,
            Err(_) => defaults.http_port,
        };

        let seed_on_startup = match std::env::var("SEED_ON_STARTUP") {
            Ok(v) => parse_flag(&v).ok_or_else(|| {
                format!("SEED_ON_STARTUP must be true/false/1/0, got '{v}'")
            })?,
            Err(_) => defaults.seed_on_startup,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.database_url),
            http_port,
            allow_origin: std::env::var("ALLOW_ORIGIN").unwrap_or(defaults.allow_origin),
            public_dir: std::env::var("PUBLIC_DIR").unwrap_or(defaults.public_dir),
            seed_on_startup,
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
