//! Order Item API
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /order-items | GET, POST | POST takes a pack and returns the created items |
//! | /order-items/{id} | GET, PATCH | |
//! | /order-items/order/{order_id} | GET | billing groups of one order |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/order-items", get(handler::list).post(handler::create))
        .route(
            "/order-items/{id}",
            get(handler::get_by_id).patch(handler::update),
        )
        .route("/order-items/order/{order_id}", get(handler::list_by_order))
}
