//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::models::{DiningTable, DiningTableCreate, DiningTableUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode, ListQuery, ValidatedJson};

/// GET /tables
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<DiningTable>>> {
    let tables = state.tables().find_all(query.pagination().as_ref()).await?;
    Ok(Json(tables))
}

/// GET /tables/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let table = state
        .tables()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TableNotFound).with_detail("id", id))?;
    Ok(Json(table))
}

/// POST /tables
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<DiningTableCreate>,
) -> AppResult<(StatusCode, Json<DiningTable>)> {
    let table = state.tables().create(payload).await?;
    tracing::info!(table_id = %table.table_id, table_number = table.table_number, by = %user.uid, "Table created");
    Ok((StatusCode::CREATED, Json(table)))
}

/// PATCH /tables/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    let table = state.tables().update(&id, payload).await?;
    Ok(Json(table))
}
