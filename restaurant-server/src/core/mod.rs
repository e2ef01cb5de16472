//! Core: configuration, shared state and the HTTP server
//!
//! - [`Config`] - configuration loaded from the environment
//! - [`ServerState`] - state shared by every request
//! - [`Server`] - listener and graceful shutdown

pub mod config;
pub mod server;
pub mod state;

pub use config::{Config, ConfigError, DatabaseConfig};
pub use server::Server;
pub use state::ServerState;
