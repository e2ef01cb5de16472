//! Menu API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/menus", get(handler::list).post(handler::create))
        .route("/menus/{id}", get(handler::get_by_id).patch(handler::update))
}
