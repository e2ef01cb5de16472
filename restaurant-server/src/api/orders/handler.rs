//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::models::{Order, OrderCreate, OrderUpdate};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode, ListQuery, ValidatedJson};

/// GET /orders
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.orders().find_all(query.pagination().as_ref()).await?;
    Ok(Json(orders))
}

/// GET /orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state
        .orders()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("id", id))?;
    Ok(Json(order))
}

/// POST /orders
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<OrderCreate>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = state.orders().create(payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// PATCH /orders/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<OrderUpdate>,
) -> AppResult<Json<Order>> {
    let order = state.orders().update(&id, payload).await?;
    Ok(Json(order))
}
