//! Invoice API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/invoices", get(handler::list).post(handler::create))
        .route(
            "/invoices/{id}",
            get(handler::get_view).patch(handler::update),
        )
}
