//! Authentication middleware
//!
//! Axum middleware guarding every route except signup, login and health.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppError;
use crate::auth::{CurrentUser, TokenType};
use crate::core::ServerState;
use crate::security_log;

/// Header carrying the access token
pub const TOKEN_HEADER: &str = "token";

/// Require a valid access token in the `token` header.
///
/// On success the decoded [`CurrentUser`] is inserted into the request
/// extensions, and into the response extensions on the way out.
///
/// | Failure | Response |
/// |---------|----------|
/// | header missing | 401 NotAuthenticated |
/// | expired | 401 TokenExpired |
/// | bad signature | 401 TokenInvalid |
/// | refresh token | 401 TokenInvalid |
/// | undecodable | 401 TokenMalformed |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflight
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let token = match req.headers().get(TOKEN_HEADER).and_then(|h| h.to_str().ok()) {
        Some(token) if !token.is_empty() => token,
        _ => {
            security_log!(WARN, "auth_missing", uri = %req.uri());
            return Err(AppError::not_authenticated());
        }
    };

    match state.jwt_service().validate_token(token) {
        Ok(claims) if claims.token_type != TokenType::Access => {
            security_log!(WARN, "auth_wrong_token_type", uid = %claims.uid, uri = %req.uri());
            Err(AppError::invalid_token("refresh token cannot be used for access"))
        }
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user.clone());
            let mut response = next.run(req).await;
            // lets the outer request log see the caller
            response.extensions_mut().insert(user);
            Ok(response)
        }
        Err(e) => {
            security_log!(WARN, "auth_failed", error = %e, uri = %req.uri());
            Err(e.into())
        }
    }
}
