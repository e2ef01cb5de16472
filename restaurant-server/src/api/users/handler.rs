//! User API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::User;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode, ListQuery};

/// GET /users
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.users().find_all(query.pagination().as_ref()).await?;
    Ok(Json(users))
}

/// GET /users/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let user = state
        .users()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::UserNotFound).with_detail("id", id))?;
    Ok(Json(user))
}
