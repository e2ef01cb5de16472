//! Shared types for the restaurant service
//!
//! Domain models, error types and auth DTOs used by the server and by
//! anything that talks to its API.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
