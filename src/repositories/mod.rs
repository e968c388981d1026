//! Persistence layer: store traits and their PostgreSQL implementations.
//!
//! Services depend on the traits so tests can substitute in-memory fakes;
//! one concrete implementation exists per entity.

pub mod property_repository;
pub mod user_repository;

pub use property_repository::PgPropertyRepository;
pub use user_repository::PgUserRepository;

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{NewUser, Property, PropertyRequest, UserResponse, UserUpdate};

/// Predicate selecting active (not soft-deleted) rows. Every read, update,
/// and delete must append this; it lives here so no call site re-spells it.
pub(crate) const ACTIVE: &str = "deleted_at IS NULL";

/// Store for user records with soft-delete semantics.
///
/// Point lookups return `Option`; `update` and `delete` report `NotFound`
/// themselves since they observe the affected row count directly.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<UserResponse>, ApiError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<UserResponse>, ApiError>;
    async fn get_by_email(&self, email: &str) -> Result<Option<UserResponse>, ApiError>;
    /// The only operation that exposes a password digest, and only to the
    /// account service for verification.
    async fn password_digest_by_email(&self, email: &str) -> Result<Option<String>, ApiError>;
    async fn create(&self, user: NewUser) -> Result<UserResponse, ApiError>;
    async fn update(&self, id: i64, update: UserUpdate) -> Result<UserResponse, ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// Store for property records with soft-delete semantics.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Property>, ApiError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Property>, ApiError>;
    async fn create(&self, property: PropertyRequest) -> Result<Property, ApiError>;
    /// Full-record replace of the row with the given id.
    async fn update(&self, id: i64, property: PropertyRequest) -> Result<Property, ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

#[cfg(test)]
pub mod test_support;
