//! Signup and login
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /signup | POST | 201 with the created user |
//! | /login | POST | `{ user, token, refresh_token }` |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/signup", post(handler::signup))
        .route("/login", post(handler::login))
}
