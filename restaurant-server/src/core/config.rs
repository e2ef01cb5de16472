use crate::auth::JwtConfig;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Datastore connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `mem://`, `rocksdb://path` or `ws://host:port`
    pub url: String,
    pub namespace: String,
    pub database: String,
    /// Root credentials, used only when both are set
    pub username: Option<String>,
    pub password: Option<String>,
    /// Upper bound for every single store operation
    pub op_timeout: Duration,
}

impl DatabaseConfig {
    /// In-memory datastore, handy for tests
    pub fn in_memory() -> Self {
        Self {
            url: "mem://".into(),
            namespace: "restaurant".into(),
            database: "restaurant".into(),
            username: None,
            password: None,
            op_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Notes |
/// |----------|---------|-------|
/// | DATABASE_URL | required | `rocksdb://./data`, `mem://`, `ws://localhost:8000` |
/// | DATABASE_USER / DATABASE_PASSWORD | unset | root sign-in when both set |
/// | DATABASE_NAMESPACE / DATABASE_NAME | restaurant | |
/// | JWT_SECRET | required | |
/// | HTTP_PORT (or PORT) | 8000 | |
/// | REQUEST_TIMEOUT_MS | 100000 | per store operation |
/// | LOG_LEVEL | info | `RUST_LOG` wins when set |
/// | LOG_JSON | false | |
/// | LOG_DIR | unset | enables rotating log files |
/// | ENVIRONMENT | development | |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=rocksdb://./data JWT_SECRET=change-me HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub http_port: u16,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

const DEFAULT_HTTP_PORT: u16 = 8000;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 100_000;

impl Config {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let http_port = match get("HTTP_PORT") {
            Some(v) => parse("HTTP_PORT", v)?,
            None => match get("PORT") {
                Some(v) => parse("PORT", v)?,
                None => DEFAULT_HTTP_PORT,
            },
        };
        let request_timeout_ms = match get("REQUEST_TIMEOUT_MS") {
            Some(v) => parse("REQUEST_TIMEOUT_MS", v)?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };
        let log_json = match get("LOG_JSON") {
            Some(v) => parse("LOG_JSON", v)?,
            None => false,
        };

        Ok(Self {
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                namespace: get("DATABASE_NAMESPACE").unwrap_or_else(|| "restaurant".into()),
                database: get("DATABASE_NAME").unwrap_or_else(|| "restaurant".into()),
                username: get("DATABASE_USER"),
                password: get("DATABASE_PASSWORD"),
                op_timeout: Duration::from_millis(request_timeout_ms),
            },
            jwt: JwtConfig::new(required("JWT_SECRET")?),
            http_port,
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json,
            log_dir: get("LOG_DIR"),
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
