//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::models::{Menu, MenuCreate, MenuUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode, ListQuery, ValidatedJson};

/// GET /menus
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Menu>>> {
    let menus = state.menus().find_all(query.pagination().as_ref()).await?;
    Ok(Json(menus))
}

/// GET /menus/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Menu>> {
    let menu = state
        .menus()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::MenuNotFound).with_detail("id", id))?;
    Ok(Json(menu))
}

/// POST /menus
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<MenuCreate>,
) -> AppResult<(StatusCode, Json<Menu>)> {
    let menu = state.menus().create(payload).await?;
    tracing::info!(menu_id = %menu.menu_id, by = %user.uid, "Menu created");
    Ok((StatusCode::CREATED, Json(menu)))
}

/// PATCH /menus/{id}
///
/// A payload carrying both dates must describe a future window.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<MenuUpdate>,
) -> AppResult<Json<Menu>> {
    let menu = state.menus().update(&id, payload).await?;
    Ok(Json(menu))
}
