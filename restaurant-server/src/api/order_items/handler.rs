//! Order Item API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::models::{OrderBilling, OrderItem, OrderItemPack, OrderItemUpdate};

use crate::billing::compute_order_billing;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode, ListQuery, ValidatedJson};

/// GET /order-items
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<OrderItem>>> {
    let items = state
        .order_items()
        .find_all(query.pagination().as_ref())
        .await?;
    Ok(Json(items))
}

/// GET /order-items/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<OrderItem>> {
    let item = state
        .order_items()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderItemNotFound).with_detail("id", id))?;
    Ok(Json(item))
}

/// GET /order-items/order/{order_id}
///
/// Empty list when the order has no items.
pub async fn list_by_order(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<Json<Vec<OrderBilling>>> {
    let billings = compute_order_billing(&state.db, &order_id).await?;
    Ok(Json(billings))
}

/// POST /order-items
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(pack): ValidatedJson<OrderItemPack>,
) -> AppResult<(StatusCode, Json<Vec<OrderItem>>)> {
    let items = state.order_items().create_pack(pack).await?;
    Ok((StatusCode::CREATED, Json(items)))
}

/// PATCH /order-items/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<OrderItemUpdate>,
) -> AppResult<Json<OrderItem>> {
    let item = state.order_items().update(&id, payload).await?;
    Ok(Json(item))
}
