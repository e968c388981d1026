use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User data returned in API responses. The password digest never leaves
/// the repository layer, so this is also the row type reads map onto.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = 1)]
    pub id: i64,
    /// User's username
    #[schema(example = "johndoe")]
    pub username: String,
    /// User's email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// When the user was created
    pub created_at: DateTime<Utc>,
    /// When the user was last updated
    pub updated_at: DateTime<Utc>,
}

/// Insert payload handed to the user store. Carries the bcrypt digest,
/// never the plaintext password.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Full-replace update payload for the user store.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
}

/// Request payload for user registration
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Unique username
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    #[schema(example = "johndoe")]
    pub username: String,
    /// User's email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "securePassword123")]
    pub password: String,
}

/// Request payload for updating a user. A full replace, not a patch.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New username
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    #[schema(example = "johndoe")]
    pub username: String,
    /// New email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
}

/// Request payload for user login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User's email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User's password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "securePassword123")]
    pub password: String,
}
