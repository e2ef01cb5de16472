//! JWT token service
//!
//! Issues HS256-signed access/refresh token pairs and validates them.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use shared::error::AppError;
use shared::models::{User, UserType};
use thiserror::Error;

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Signing secret, read once at startup
    pub secret: String,
    /// Access token lifetime (hours)
    pub access_ttl_hours: i64,
    /// Refresh token lifetime (hours)
    pub refresh_ttl_hours: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_ttl_hours: 24,
            refresh_ttl_hours: 24 * 7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims stored in both tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Public user id
    pub uid: String,
    pub user_type: UserType,
    pub token_type: TokenType,
    /// Expiry (Unix seconds)
    pub exp: i64,
    /// Issued at (Unix seconds)
    pub iat: i64,
}

/// A freshly issued access/refresh pair
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("the token is invalid")]
    InvalidSignature,

    #[error("the token is malformed: {0}")]
    Malformed(String),

    #[error("token is expired")]
    Expired,

    #[error("token generation failed: {0}")]
    GenerationFailed(String),
}

impl From<JwtError> for AppError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::InvalidSignature => AppError::invalid_token(err.to_string()),
            JwtError::Malformed(_) => AppError::malformed_token(err.to_string()),
            JwtError::Expired => AppError::token_expired(),
            JwtError::GenerationFailed(_) => AppError::internal(err.to_string()),
        }
    }
}

/// JWT token service
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_ttl_hours", &self.config.access_ttl_hours)
            .field("refresh_ttl_hours", &self.config.refresh_ttl_hours)
            .finish_non_exhaustive()
    }
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Issue an access token and a refresh token for `user`
    pub fn issue_tokens(&self, user: &User) -> Result<TokenPair, JwtError> {
        let now = Utc::now();
        let claims_for = |token_type, ttl_hours| Claims {
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            uid: user.user_id.clone(),
            user_type: user.user_type,
            token_type,
            exp: (now + Duration::hours(ttl_hours)).timestamp(),
            iat: now.timestamp(),
        };

        let access_token = self.sign(&claims_for(TokenType::Access, self.config.access_ttl_hours))?;
        let refresh_token =
            self.sign(&claims_for(TokenType::Refresh, self.config.refresh_ttl_hours))?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    fn sign(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Verify and decode a token.
    ///
    /// Signature and decoding failures are reported before expiry, so a
    /// forged token that is also stale yields `InvalidSignature`.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                _ => JwtError::Malformed(e.to_string()),
            })?;

        if token_data.claims.exp < Utc::now().timestamp() {
            return Err(JwtError::Expired);
        }

        Ok(token_data.claims)
    }
}

/// Authenticated caller, built from validated claims by the auth middleware
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub uid: String,
    pub user_type: UserType,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email,
            first_name: claims.first_name,
            last_name: claims.last_name,
            uid: claims.uid,
            user_type: claims.user_type,
        }
    }
}
