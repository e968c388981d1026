//! PostgreSQL property store.

use async_trait::async_trait;
use log::debug;
use sqlx::PgPool;

use crate::constants::ERR_PROPERTY_NOT_FOUND;
use crate::errors::ApiError;
use crate::models::{Property, PropertyRequest};
use crate::repositories::{PropertyStore, ACTIVE};

pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyStore for PgPropertyRepository {
    async fn list_all(&self) -> Result<Vec<Property>, ApiError> {
        let properties = sqlx::query_as::<_, Property>(&format!(
            "SELECT * FROM properties WHERE {ACTIVE} ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!("Repository: retrieved {} properties", properties.len());
        Ok(properties)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Property>, ApiError> {
        debug!("Repository: finding property by id: {}", id);
        let property = sqlx::query_as::<_, Property>(&format!(
            "SELECT * FROM properties WHERE id = $1 AND {ACTIVE}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(property)
    }

    async fn create(&self, property: PropertyRequest) -> Result<Property, ApiError> {
        let created = sqlx::query_as::<_, Property>(
            "INSERT INTO properties (\
                title, listing_date, address, neighborhood, city, zone, reference, \
                price, construction_m2, land_m2, garden_m2, is_occupied, is_furnished, \
                floors, bedrooms, bathrooms, garage_size, gas_types, amenities, extras, \
                utilities, notes, owner_id, user_id, property_type, transaction_type, status\
             ) VALUES (\
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, \
                $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27\
             ) RETURNING *",
        )
        .bind(property.title)
        .bind(property.listing_date)
        .bind(property.address)
        .bind(property.neighborhood)
        .bind(property.city)
        .bind(property.zone)
        .bind(property.reference)
        .bind(property.price)
        .bind(property.construction_m2)
        .bind(property.land_m2)
        .bind(property.garden_m2)
        .bind(property.is_occupied)
        .bind(property.is_furnished)
        .bind(property.floors)
        .bind(property.bedrooms)
        .bind(property.bathrooms)
        .bind(property.garage_size)
        .bind(property.gas_types)
        .bind(property.amenities)
        .bind(property.extras)
        .bind(property.utilities)
        .bind(property.notes)
        .bind(property.owner_id)
        .bind(property.user_id)
        .bind(property.property_type)
        .bind(property.transaction_type)
        .bind(property.status)
        .fetch_one(&self.pool)
        .await?;

        debug!("Repository: created property {}", created.id);
        Ok(created)
    }

    async fn update(&self, id: i64, property: PropertyRequest) -> Result<Property, ApiError> {
        let updated = sqlx::query_as::<_, Property>(&format!(
            "UPDATE properties SET \
                title = $1, listing_date = $2, address = $3, neighborhood = $4, \
                city = $5, zone = $6, reference = $7, price = $8, \
                construction_m2 = $9, land_m2 = $10, garden_m2 = $11, \
                is_occupied = $12, is_furnished = $13, floors = $14, \
                bedrooms = $15, bathrooms = $16, garage_size = $17, \
                gas_types = $18, amenities = $19, extras = $20, utilities = $21, \
                notes = $22, owner_id = $23, user_id = $24, property_type = $25, \
                transaction_type = $26, status = $27, updated_at = NOW() \
             WHERE id = $28 AND {ACTIVE} RETURNING *"
        ))
        .bind(property.title)
        .bind(property.listing_date)
        .bind(property.address)
        .bind(property.neighborhood)
        .bind(property.city)
        .bind(property.zone)
        .bind(property.reference)
        .bind(property.price)
        .bind(property.construction_m2)
        .bind(property.land_m2)
        .bind(property.garden_m2)
        .bind(property.is_occupied)
        .bind(property.is_furnished)
        .bind(property.floors)
        .bind(property.bedrooms)
        .bind(property.bathrooms)
        .bind(property.garage_size)
        .bind(property.gas_types)
        .bind(property.amenities)
        .bind(property.extras)
        .bind(property.utilities)
        .bind(property.notes)
        .bind(property.owner_id)
        .bind(property.user_id)
        .bind(property.property_type)
        .bind(property.transaction_type)
        .bind(property.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| ApiError::NotFound(ERR_PROPERTY_NOT_FOUND.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let result = sqlx::query(&format!(
            "UPDATE properties SET deleted_at = NOW() WHERE id = $1 AND {ACTIVE}"
        ))
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(ERR_PROPERTY_NOT_FOUND.to_string()));
        }

        debug!("Repository: soft-deleted property {}", id);
        Ok(())
    }
}
