//! Invoice API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::models::{Invoice, InvoiceCreate, InvoiceUpdate, InvoiceView};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode, ListQuery, ValidatedJson};

/// GET /invoices
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Invoice>>> {
    let invoices = state.invoices().find_all(query.pagination().as_ref()).await?;
    Ok(Json(invoices))
}

/// GET /invoices/{id}
///
/// The invoice joined with the billing summary of its order. An order
/// with no items is reported as `NoItemsForOrder`.
pub async fn get_view(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InvoiceView>> {
    let view = state
        .invoices()
        .view(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::InvoiceNotFound).with_detail("id", id))?;
    Ok(Json(view))
}

/// POST /invoices
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<InvoiceCreate>,
) -> AppResult<(StatusCode, Json<Invoice>)> {
    let invoice = state.invoices().create(payload).await?;
    tracing::debug!(invoice_id = %invoice.invoice_id, by = %user.uid, "Invoice issued");
    Ok((StatusCode::CREATED, Json(invoice)))
}

/// PATCH /invoices/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<InvoiceUpdate>,
) -> AppResult<Json<Invoice>> {
    let invoice = state.invoices().update(&id, payload).await?;
    Ok(Json(invoice))
}
