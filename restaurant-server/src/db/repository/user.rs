//! User Repository

use super::{RepoError, RepoResult, apply_update};
use crate::auth::password::{hash_password, verify_password};
use crate::db::collections::USER;
use crate::db::{Collection, DbService};
use crate::utils::PaginationParams;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use shared::client::SignupRequest;
use shared::models::{User, UserType};
use shared::util::{new_public_id, now_millis};

/// Stored shape of a user; only this type ever sees the password hash
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct UserRecord {
    user_id: String,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    password: String,
    user_type: UserType,
    token: Option<String>,
    refresh_token: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            user_id: record.user_id,
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            phone: record.phone,
            user_type: record.user_type,
            token: record.token,
            refresh_token: record.refresh_token,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Serialize)]
struct TokenPatch<'a> {
    token: &'a str,
    refresh_token: &'a str,
}

#[derive(Clone)]
pub struct UserRepository {
    users: Collection,
}

impl UserRepository {
    pub fn new(db: &DbService) -> Self {
        Self {
            users: db.collection(USER),
        }
    }

    pub async fn find_all(&self, page: Option<&PaginationParams>) -> RepoResult<Vec<User>> {
        let records: Vec<UserRecord> = self.users.find_all(page).await?;
        Ok(records.into_iter().map(User::from).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let record: Option<UserRecord> = self.users.find_by_key(id).await?;
        Ok(record.map(User::from))
    }

    /// Register a user. Email and phone must both be unused.
    pub async fn signup(&self, data: SignupRequest) -> RepoResult<User> {
        let by_email: Option<IgnoredAny> = self.users.find_one_where("email", &data.email).await?;
        let by_phone: Option<IgnoredAny> = self.users.find_one_where("phone", &data.phone).await?;
        if by_email.is_some() || by_phone.is_some() {
            return Err(RepoError::Duplicate(
                "this email or phone number already exists".to_string(),
            ));
        }

        let password = hash_password(&data.password)
            .map_err(|e| RepoError::Internal(format!("password hashing failed: {e}")))?;

        let now = now_millis();
        let record = UserRecord {
            user_id: new_public_id(),
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            password,
            user_type: data.user_type,
            token: None,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        };
        let key = record.user_id.clone();
        let created = self.users.insert(&key, record).await?;
        tracing::info!(user_id = %created.user_id, user_type = %created.user_type, "User registered");
        Ok(created.into())
    }

    /// Check `email`/`password`. `None` when either is wrong; the caller
    /// must not reveal which.
    pub async fn authenticate(&self, email: &str, password: &str) -> RepoResult<Option<User>> {
        let Some(record) = self
            .users
            .find_one_where::<UserRecord>("email", email)
            .await?
        else {
            return Ok(None);
        };

        match verify_password(password, &record.password) {
            Ok(true) => Ok(Some(record.into())),
            Ok(false) => Ok(None),
            Err(e) => {
                tracing::warn!(user_id = %record.user_id, error = %e, "Stored password hash is unreadable");
                Ok(None)
            }
        }
    }

    /// Store the latest token pair on the user record
    pub async fn update_all_tokens(
        &self,
        user_id: &str,
        access_token: &str,
        refresh_token: &str,
    ) -> RepoResult<User> {
        let patch = TokenPatch {
            token: access_token,
            refresh_token,
        };
        let record: UserRecord = apply_update(&self.users, "user_id", user_id, &patch).await?;
        Ok(record.into())
    }
}
