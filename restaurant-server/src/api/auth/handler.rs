//! Authentication Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::client::{LoginRequest, LoginResponse, SignupRequest};
use shared::models::User;

use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppError, AppResult, ValidatedJson};

/// POST /signup
pub async fn signup(
    State(state): State<ServerState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.users().signup(req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /login
///
/// Unknown email and wrong password get the same answer.
pub async fn login(
    State(state): State<ServerState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let users = state.users();

    let Some(user) = users.authenticate(&req.email, &req.password).await? else {
        tracing::warn!(email = %req.email, "Login failed - invalid credentials");
        security_log!(WARN, "login_failed", email = %req.email);
        return Err(AppError::invalid_credentials());
    };

    let pair = state.jwt_service().issue_tokens(&user)?;
    let user = users
        .update_all_tokens(&user.user_id, &pair.access_token, &pair.refresh_token)
        .await?;

    tracing::info!(user_id = %user.user_id, user_type = %user.user_type, "User logged in");
    security_log!(INFO, "login_success", user_id = %user.user_id);

    Ok(Json(LoginResponse {
        user,
        token: pair.access_token,
        refresh_token: pair.refresh_token,
    }))
}
