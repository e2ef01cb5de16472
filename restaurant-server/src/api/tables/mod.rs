//! Dining Table API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/tables", get(handler::list).post(handler::create))
        .route("/tables/{id}", get(handler::get_by_id).patch(handler::update))
}
