//! Access log
//!
//! One event per finished request: request id, route, status, elapsed time
//! and, on protected routes, the caller's uid.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};

use crate::auth::CurrentUser;

/// Header carrying the request id, set by `SetRequestIdLayer`
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 4xx and 5xx are logged at `warn`, the rest at `info`.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let route = match req.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_owned(),
        None => req.uri().path().to_owned(),
    };
    let span = info_span!("http", request_id = %id, method = %req.method(), route = %route);

    let response = next.run(req).instrument(span.clone()).await;

    let _entered = span.enter();
    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let uid = response.extensions().get::<CurrentUser>().map(|u| u.uid.as_str());
    if response.status().is_client_error() || response.status().is_server_error() {
        warn!(status, elapsed_ms, uid, "request failed");
    } else {
        info!(status, elapsed_ms, uid, "request served");
    }
    response
}
