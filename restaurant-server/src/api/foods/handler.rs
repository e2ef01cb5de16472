//! Food API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::models::{Food, FoodCreate, FoodUpdate};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode, ListQuery, ValidatedJson};

/// GET /foods
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Food>>> {
    let foods = state.foods().find_all(query.pagination().as_ref()).await?;
    Ok(Json(foods))
}

/// GET /foods/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Food>> {
    let food = state
        .foods()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::FoodNotFound).with_detail("id", id))?;
    Ok(Json(food))
}

/// POST /foods
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<FoodCreate>,
) -> AppResult<(StatusCode, Json<Food>)> {
    let food = state.foods().create(payload).await?;
    tracing::info!(food_id = %food.food_id, menu_id = %food.menu_id, by = %user.uid, "Food created");
    Ok((StatusCode::CREATED, Json(food)))
}

/// PATCH /foods/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<FoodUpdate>,
) -> AppResult<Json<Food>> {
    let food = state.foods().update(&id, payload).await?;
    Ok(Json(food))
}
