//! Restaurant Server - ordering and billing backend
//!
//! # Overview
//!
//! A REST service for a single restaurant: users, dining tables, menus,
//! foods, orders, order items and invoices, stored in SurrealDB and
//! guarded by JWT authentication. Invoices are priced by the billing
//! aggregator, which joins an order's items with their foods and table.
//!
//! # Module layout
//!
//! ```text
//! restaurant-server/src/
//! ├── core/          # configuration, shared state, server
//! ├── auth/          # JWT, argon2, auth middleware
//! ├── api/           # HTTP routes and handlers
//! ├── billing/       # order billing pipeline
//! ├── db/            # SurrealDB connection and repositories
//! ├── middleware/    # request logging
//! ├── money/         # decimal money helpers
//! └── utils/         # errors, extractors, logging setup
//! ```

pub mod api;
pub mod auth;
pub mod billing;
pub mod core;
pub mod db;
pub mod middleware;
pub mod money;
pub mod utils;

// Re-export public types
pub use api::build_app;
pub use auth::{CurrentUser, JwtService};
pub use crate::core::{Config, ConfigError, Server, ServerState};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Security event logging
///
/// Emits on the `security` target, which the file logger routes to its own
/// rotating file.
///
/// ```ignore
/// security_log!(WARN, "auth_failed", error = %e, uri = %req.uri());
/// ```
#[macro_export]
macro_rules! security_log {
    (WARN, $event:expr, $($arg:tt)*) => {
        tracing::warn!(
            target: "security",
            event = $event,
            timestamp = chrono::Local::now().to_rfc3339(),
            level = "WARN",
            $($arg)*
        );
    };
    (ERROR, $event:expr, $($arg:tt)*) => {
        tracing::error!(
            target: "security",
            event = $event,
            timestamp = chrono::Local::now().to_rfc3339(),
            level = "ERROR",
            $($arg)*
        );
    };
    (INFO, $event:expr, $($arg:tt)*) => {
        tracing::info!(
            target: "security",
            event = $event,
            timestamp = chrono::Local::now().to_rfc3339(),
            level = "INFO",
            $($arg)*
        );
    };
}

/// Load configuration and start logging
///
/// Reads `.env` and the process environment, then installs the tracing
/// subscriber described by the configuration.
pub fn setup_environment() -> anyhow::Result<Config> {
    let config = Config::from_env()?;
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}
