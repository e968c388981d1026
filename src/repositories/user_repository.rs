//! PostgreSQL user store.
//!
//! All reads select the public columns only; the password digest leaves
//! this module through `password_digest_by_email` and nothing else.

use async_trait::async_trait;
use log::debug;
use sqlx::error::DatabaseError;
use sqlx::PgPool;

use crate::constants::{
    ERR_DUPLICATE_FIELD, ERR_EMAIL_EXISTS, ERR_USERNAME_EXISTS, ERR_USER_NOT_FOUND,
};
use crate::errors::ApiError;
use crate::models::{NewUser, UserResponse, UserUpdate};
use crate::repositories::{UserStore, ACTIVE};

const PUBLIC_COLUMNS: &str = "id, username, email, created_at, updated_at";

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Translate a unique-index violation into the user-facing conflict message
/// for the column it guards.
fn conflict_error(db_err: &dyn DatabaseError) -> ApiError {
    let message = match db_err.constraint() {
        Some("users_email_active_idx") => ERR_EMAIL_EXISTS,
        Some("users_username_active_idx") => ERR_USERNAME_EXISTS,
        _ => ERR_DUPLICATE_FIELD,
    };
    ApiError::Conflict(message.to_string())
}

fn map_insert_error(err: sqlx::Error) -> ApiError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            conflict_error(db_err.as_ref())
        }
        _ => err.into(),
    }
}

#[async_trait]
impl UserStore for PgUserRepository {
    async fn list_all(&self) -> Result<Vec<UserResponse>, ApiError> {
        let users = sqlx::query_as::<_, UserResponse>(&format!(
            "SELECT {PUBLIC_COLUMNS} FROM users WHERE {ACTIVE} ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!("Repository: retrieved {} users", users.len());
        Ok(users)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<UserResponse>, ApiError> {
        debug!("Repository: finding user by id: {}", id);
        let user = sqlx::query_as::<_, UserResponse>(&format!(
            "SELECT {PUBLIC_COLUMNS} FROM users WHERE id = $1 AND {ACTIVE}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<UserResponse>, ApiError> {
        let user = sqlx::query_as::<_, UserResponse>(&format!(
            "SELECT {PUBLIC_COLUMNS} FROM users WHERE email = $1 AND {ACTIVE}"
        ))
        .bind(email.to_lowercase())
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn password_digest_by_email(&self, email: &str) -> Result<Option<String>, ApiError> {
        let digest = sqlx::query_scalar::<_, String>(&format!(
            "SELECT password_hash FROM users WHERE email = $1 AND {ACTIVE}"
        ))
        .bind(email.to_lowercase())
        .fetch_optional(&self.pool)
        .await?;

        Ok(digest)
    }

    async fn create(&self, user: NewUser) -> Result<UserResponse, ApiError> {
        let created = sqlx::query_as::<_, UserResponse>(&format!(
            "INSERT INTO users (username, email, password_hash) \
             VALUES ($1, $2, $3) RETURNING {PUBLIC_COLUMNS}"
        ))
        .bind(user.username)
        .bind(user.email)
        .bind(user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        debug!("Repository: created user {}", created.id);
        Ok(created)
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<UserResponse, ApiError> {
        let updated = sqlx::query_as::<_, UserResponse>(&format!(
            "UPDATE users SET username = $1, email = $2, updated_at = NOW() \
             WHERE id = $3 AND {ACTIVE} RETURNING {PUBLIC_COLUMNS}"
        ))
        .bind(update.username)
        .bind(update.email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_insert_error)?;

        updated.ok_or_else(|| ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let result = sqlx::query(&format!(
            "UPDATE users SET deleted_at = NOW() WHERE id = $1 AND {ACTIVE}"
        ))
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()));
        }

        debug!("Repository: soft-deleted user {}", id);
        Ok(())
    }
}
