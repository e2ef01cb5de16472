//! HTTP API
//!
//! # Routes
//!
//! | Module | Paths | Auth |
//! |--------|-------|------|
//! | [`auth`] | `/signup`, `/login` | no |
//! | [`health`] | `/health` | no |
//! | [`users`] | `/users` | yes |
//! | [`tables`] | `/tables` | yes |
//! | [`menus`] | `/menus` | yes |
//! | [`foods`] | `/foods` | yes |
//! | [`orders`] | `/orders` | yes |
//! | [`order_items`] | `/order-items` | yes |
//! | [`invoices`] | `/invoices` | yes |

pub mod auth;
pub mod foods;
pub mod health;
pub mod invoices;
pub mod menus;
pub mod order_items;
pub mod orders;
pub mod tables;
pub mod users;

use axum::{Router, middleware};
use http::HeaderName;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::auth::require_auth;
use crate::core::ServerState;
use crate::middleware::{REQUEST_ID_HEADER, logging_middleware};

pub use crate::utils::{AppError, AppResult};

/// Routes reachable without a token
fn public_routes() -> Router<ServerState> {
    Router::new().merge(auth::router()).merge(health::router())
}

/// Routes behind [`require_auth`]
fn protected_routes() -> Router<ServerState> {
    Router::new()
        .merge(users::router())
        .merge(tables::router())
        .merge(menus::router())
        .merge(foods::router())
        .merge(orders::router())
        .merge(order_items::router())
        .merge(invoices::router())
}

/// Build the full application with state and middleware applied
pub fn build_app(state: ServerState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    public_routes()
        .merge(
            protected_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
        )
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new())
                .layer(middleware::from_fn(logging_middleware)),
        )
}
