//! Account service for login verification and the user lifecycle.

use std::sync::Arc;

use log::{info, warn};
use sqlx::PgPool;

use crate::constants::{
    ERR_EMAIL_EXISTS, ERR_EMAIL_REQUIRED, ERR_INVALID_CREDENTIALS, ERR_USERNAME_REQUIRED,
    ERR_USER_NOT_FOUND,
};
use crate::errors::ApiError;
use crate::models::{CreateUserRequest, NewUser, UpdateUserRequest, UserResponse, UserUpdate};
use crate::repositories::{PgUserRepository, UserStore};
use crate::services::password::{hash_password, verify_password};
use crate::utils::log_sanitizer::mask_email;

pub struct AccountService {
    store: Arc<dyn UserStore>,
}

impl AccountService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: Arc::new(PgUserRepository::new(pool)),
        }
    }

    /// Create an AccountService with a substitute store (for tests).
    #[allow(dead_code)]
    pub fn with_store(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Verify a user's credentials.
    ///
    /// An unknown email and a wrong password produce the same error; the
    /// caller can never tell which condition occurred.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let digest = self.store.password_digest_by_email(email).await?;

        let verified = match digest {
            Some(digest) => verify_password(password, &digest),
            None => false,
        };

        if !verified {
            warn!("Login failed for {}", mask_email(email));
            return Err(ApiError::Unauthorized(ERR_INVALID_CREDENTIALS.to_string()));
        }

        info!("Login successful for {}", mask_email(email));
        Ok(())
    }

    /// Register a new user. The password is hashed before it reaches the
    /// store; the returned record carries no digest.
    pub async fn register(&self, req: CreateUserRequest) -> Result<UserResponse, ApiError> {
        if req.username.is_empty() {
            return Err(ApiError::BadRequest(ERR_USERNAME_REQUIRED.to_string()));
        }
        if req.email.is_empty() {
            return Err(ApiError::BadRequest(ERR_EMAIL_REQUIRED.to_string()));
        }

        // Check if the email is already registered
        if self.store.get_by_email(&req.email).await?.is_some() {
            return Err(ApiError::Conflict(ERR_EMAIL_EXISTS.to_string()));
        }

        let password_hash = hash_password(&req.password)?;

        let created = self
            .store
            .create(NewUser {
                username: req.username,
                email: req.email.to_lowercase(),
                password_hash,
            })
            .await?;

        info!(
            "Registered user {} ({})",
            created.id,
            mask_email(&created.email)
        );
        Ok(created)
    }

    pub async fn get_all_users(&self) -> Result<Vec<UserResponse>, ApiError> {
        self.store.list_all().await
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<UserResponse, ApiError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()))
    }

    /// Full replace of username and email.
    pub async fn update_user(
        &self,
        id: i64,
        req: UpdateUserRequest,
    ) -> Result<UserResponse, ApiError> {
        if req.username.is_empty() {
            return Err(ApiError::BadRequest(ERR_USERNAME_REQUIRED.to_string()));
        }
        if req.email.is_empty() {
            return Err(ApiError::BadRequest(ERR_EMAIL_REQUIRED.to_string()));
        }

        self.store
            .update(
                id,
                UserUpdate {
                    username: req.username,
                    email: req.email.to_lowercase(),
                },
            )
            .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.store.delete(id).await?;
        info!("Deleted user {}", id);
        Ok(())
    }
}
