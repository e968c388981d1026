use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of property being listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "property_type", rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Land,
    Commercial,
    Storehouse,
    Office,
    Industrial,
    Other,
}

/// Whether the listing is for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "transaction_type", rename_all = "lowercase")]
pub enum TransactionType {
    Sale,
    Rental,
}

/// Listing status. A plain attribute: no transition graph is enforced,
/// any status may be set to any other via update.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "property_status", rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Available,
    Sold,
    Rented,
    Reserved,
}

/// A property row. `deleted_at` is persistence-only and never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Property {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Sunny two-bedroom apartment")]
    pub title: String,
    pub listing_date: Option<DateTime<Utc>>,
    #[schema(example = "742 Evergreen Terrace")]
    pub address: String,
    pub neighborhood: String,
    pub city: String,
    pub zone: String,
    /// Free-text reference code for the listing
    pub reference: String,
    #[schema(example = 250000.0)]
    pub price: f64,
    pub construction_m2: i32,
    pub land_m2: i32,
    pub garden_m2: i32,
    pub is_occupied: bool,
    pub is_furnished: bool,
    pub floors: i32,
    pub bedrooms: i32,
    pub bathrooms: i32,
    /// Number of cars the garage holds
    pub garage_size: i32,
    pub gas_types: Vec<String>,
    pub amenities: Vec<String>,
    pub extras: Vec<String>,
    pub utilities: Vec<String>,
    pub notes: String,
    /// Owning user (weak reference, lookup only)
    pub owner_id: i64,
    /// Managing agent (weak reference, lookup only)
    pub user_id: i64,
    pub property_type: PropertyType,
    pub transaction_type: TransactionType,
    pub status: PropertyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing, default)]
    #[schema(ignore)]
    pub deleted_at: Option<DateTime<Utc>>,
}

fn default_floors() -> i32 {
    1
}

/// Request payload for creating or replacing a property. Updates are a
/// full-record replace, so create and update share this shape; the id
/// comes from the path on update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyRequest {
    #[schema(example = "Sunny two-bedroom apartment")]
    pub title: String,
    #[serde(default)]
    pub listing_date: Option<DateTime<Utc>>,
    #[schema(example = "742 Evergreen Terrace")]
    pub address: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zone: String,
    #[serde(default)]
    pub reference: String,
    #[schema(example = 250000.0)]
    pub price: f64,
    #[serde(default)]
    pub construction_m2: i32,
    #[serde(default)]
    pub land_m2: i32,
    #[serde(default)]
    pub garden_m2: i32,
    #[serde(default)]
    pub is_occupied: bool,
    #[serde(default)]
    pub is_furnished: bool,
    #[serde(default = "default_floors")]
    pub floors: i32,
    #[serde(default)]
    pub bedrooms: i32,
    #[serde(default)]
    pub bathrooms: i32,
    #[serde(default)]
    pub garage_size: i32,
    #[serde(default)]
    pub gas_types: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub extras: Vec<String>,
    #[serde(default)]
    pub utilities: Vec<String>,
    #[serde(default)]
    pub notes: String,
    pub owner_id: i64,
    pub user_id: i64,
    pub property_type: PropertyType,
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub status: PropertyStatus,
}
