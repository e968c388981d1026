//! In-memory store fakes for service and handler tests.
//!
//! Both fakes reproduce the persistence contract: soft-deleted rows are
//! invisible to reads, uniqueness holds among active rows only, and
//! update/delete report `NotFound` when no active row matches.

use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::constants::{
    ERR_EMAIL_EXISTS, ERR_PROPERTY_NOT_FOUND, ERR_USERNAME_EXISTS, ERR_USER_NOT_FOUND,
};
use crate::errors::ApiError;
use crate::models::{NewUser, Property, PropertyRequest, UserResponse, UserUpdate};
use crate::repositories::{PropertyStore, UserStore};

struct StoredUser {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl StoredUser {
    fn to_response(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

pub struct InMemoryUserStore {
    users: Mutex<Vec<StoredUser>>,
    next_id: AtomicI64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Digest stored for an email, active or not. Test-only inspection.
    pub fn stored_digest(&self, email: &str) -> Option<String> {
        let users = self.users.lock().unwrap();
        users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .map(|u| u.password_hash.clone())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn list_all(&self) -> Result<Vec<UserResponse>, ApiError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .filter(|u| u.is_active())
            .map(StoredUser::to_response)
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<UserResponse>, ApiError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.id == id && u.is_active())
            .map(StoredUser::to_response))
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<UserResponse>, ApiError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email) && u.is_active())
            .map(StoredUser::to_response))
    }

    async fn password_digest_by_email(&self, email: &str) -> Result<Option<String>, ApiError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email) && u.is_active())
            .map(|u| u.password_hash.clone()))
    }

    async fn create(&self, user: NewUser) -> Result<UserResponse, ApiError> {
        let mut users = self.users.lock().unwrap();

        if users
            .iter()
            .any(|u| u.is_active() && u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(ApiError::Conflict(ERR_EMAIL_EXISTS.to_string()));
        }
        if users
            .iter()
            .any(|u| u.is_active() && u.username == user.username)
        {
            return Err(ApiError::Conflict(ERR_USERNAME_EXISTS.to_string()));
        }

        let now = Utc::now();
        let stored = StoredUser {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        let response = stored.to_response();
        users.push(stored);
        Ok(response)
    }

    async fn update(&self, id: i64, update: UserUpdate) -> Result<UserResponse, ApiError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| {
            u.id != id && u.is_active() && u.email.eq_ignore_ascii_case(&update.email)
        }) {
            return Err(ApiError::Conflict(ERR_EMAIL_EXISTS.to_string()));
        }
        if users
            .iter()
            .any(|u| u.id != id && u.is_active() && u.username == update.username)
        {
            return Err(ApiError::Conflict(ERR_USERNAME_EXISTS.to_string()));
        }

        let user = users
            .iter_mut()
            .find(|u| u.id == id && u.is_active())
            .ok_or_else(|| ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()))?;

        user.username = update.username;
        user.email = update.email;
        user.updated_at = Utc::now();
        Ok(user.to_response())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id && u.is_active())
            .ok_or_else(|| ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()))?;

        user.deleted_at = Some(Utc::now());
        Ok(())
    }
}

pub struct InMemoryPropertyStore {
    properties: Mutex<Vec<Property>>,
    next_id: AtomicI64,
    create_calls: AtomicUsize,
}

impl InMemoryPropertyStore {
    pub fn new() -> Self {
        Self {
            properties: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
            create_calls: AtomicUsize::new(0),
        }
    }

    /// How many times `create` reached the store.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

fn materialize(id: i64, request: PropertyRequest, created_at: DateTime<Utc>) -> Property {
    Property {
        id,
        title: request.title,
        listing_date: request.listing_date,
        address: request.address,
        neighborhood: request.neighborhood,
        city: request.city,
        zone: request.zone,
        reference: request.reference,
        price: request.price,
        construction_m2: request.construction_m2,
        land_m2: request.land_m2,
        garden_m2: request.garden_m2,
        is_occupied: request.is_occupied,
        is_furnished: request.is_furnished,
        floors: request.floors,
        bedrooms: request.bedrooms,
        bathrooms: request.bathrooms,
        garage_size: request.garage_size,
        gas_types: request.gas_types,
        amenities: request.amenities,
        extras: request.extras,
        utilities: request.utilities,
        notes: request.notes,
        owner_id: request.owner_id,
        user_id: request.user_id,
        property_type: request.property_type,
        transaction_type: request.transaction_type,
        status: request.status,
        created_at,
        updated_at: created_at,
        deleted_at: None,
    }
}

#[async_trait]
impl PropertyStore for InMemoryPropertyStore {
    async fn list_all(&self) -> Result<Vec<Property>, ApiError> {
        let properties = self.properties.lock().unwrap();
        Ok(properties
            .iter()
            .filter(|p| p.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Property>, ApiError> {
        let properties = self.properties.lock().unwrap();
        Ok(properties
            .iter()
            .find(|p| p.id == id && p.deleted_at.is_none())
            .cloned())
    }

    async fn create(&self, property: PropertyRequest) -> Result<Property, ApiError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut properties = self.properties.lock().unwrap();
        let created = materialize(
            self.next_id.fetch_add(1, Ordering::SeqCst),
            property,
            Utc::now(),
        );
        properties.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, property: PropertyRequest) -> Result<Property, ApiError> {
        let mut properties = self.properties.lock().unwrap();
        let existing = properties
            .iter_mut()
            .find(|p| p.id == id && p.deleted_at.is_none())
            .ok_or_else(|| ApiError::NotFound(ERR_PROPERTY_NOT_FOUND.to_string()))?;

        let mut replaced = materialize(id, property, existing.created_at);
        replaced.updated_at = Utc::now();
        *existing = replaced.clone();
        Ok(replaced)
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let mut properties = self.properties.lock().unwrap();
        let existing = properties
            .iter_mut()
            .find(|p| p.id == id && p.deleted_at.is_none())
            .ok_or_else(|| ApiError::NotFound(ERR_PROPERTY_NOT_FOUND.to_string()))?;

        existing.deleted_at = Some(Utc::now());
        Ok(())
    }
}
