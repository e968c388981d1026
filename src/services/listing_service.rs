//! Listing service for property lifecycle validation.

use std::sync::Arc;

use log::info;
use sqlx::PgPool;

use crate::constants::{
    ERR_ADDRESS_REQUIRED, ERR_PRICE_NOT_POSITIVE, ERR_PROPERTY_ID_REQUIRED,
    ERR_PROPERTY_NOT_FOUND,
};
use crate::errors::ApiError;
use crate::models::{Property, PropertyRequest};
use crate::repositories::{PgPropertyRepository, PropertyStore};

pub struct ListingService {
    store: Arc<dyn PropertyStore>,
}

impl ListingService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: Arc::new(PgPropertyRepository::new(pool)),
        }
    }

    /// Create a ListingService with a substitute store (for tests).
    #[allow(dead_code)]
    pub fn with_store(store: Arc<dyn PropertyStore>) -> Self {
        Self { store }
    }

    pub async fn get_all_properties(&self) -> Result<Vec<Property>, ApiError> {
        let properties = self.store.list_all().await?;
        info!("Retrieved {} properties", properties.len());
        Ok(properties)
    }

    pub async fn get_property_by_id(&self, id: i64) -> Result<Property, ApiError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(ERR_PROPERTY_NOT_FOUND.to_string()))
    }

    pub async fn create_property(&self, req: PropertyRequest) -> Result<Property, ApiError> {
        validate_listing(&req)?;

        let created = self.store.create(req).await?;
        info!("Created property {}", created.id);
        Ok(created)
    }

    /// Full-record replace of the property with the given id.
    pub async fn update_property(
        &self,
        id: i64,
        req: PropertyRequest,
    ) -> Result<Property, ApiError> {
        if id <= 0 {
            return Err(ApiError::BadRequest(ERR_PROPERTY_ID_REQUIRED.to_string()));
        }
        validate_listing(&req)?;

        let updated = self.store.update(id, req).await?;
        info!("Updated property {}", updated.id);
        Ok(updated)
    }

    pub async fn delete_property(&self, id: i64) -> Result<(), ApiError> {
        if id <= 0 {
            return Err(ApiError::BadRequest(ERR_PROPERTY_ID_REQUIRED.to_string()));
        }

        self.store.delete(id).await?;
        info!("Deleted property {}", id);
        Ok(())
    }
}

/// Rules every create or replace must satisfy before the store is touched.
fn validate_listing(req: &PropertyRequest) -> Result<(), ApiError> {
    if req.address.is_empty() {
        return Err(ApiError::BadRequest(ERR_ADDRESS_REQUIRED.to_string()));
    }
    if req.price <= 0.0 {
        return Err(ApiError::BadRequest(ERR_PRICE_NOT_POSITIVE.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PropertyStatus, PropertyType, TransactionType};
    use crate::repositories::test_support::InMemoryPropertyStore;

    fn service() -> (ListingService, Arc<InMemoryPropertyStore>) {
        let store = Arc::new(InMemoryPropertyStore::new());
        (ListingService::with_store(store.clone()), store)
    }

    fn cottage() -> PropertyRequest {
        PropertyRequest {
            title: "Stone cottage with garden".to_string(),
            listing_date: None,
            address: "12 Mill Lane".to_string(),
            neighborhood: "Old Town".to_string(),
            city: "Springfield".to_string(),
            zone: "North".to_string(),
            reference: "REF-0042".to_string(),
            price: 184_500.0,
            construction_m2: 96,
            land_m2: 320,
            garden_m2: 140,
            is_occupied: false,
            is_furnished: true,
            floors: 2,
            bedrooms: 3,
            bathrooms: 1,
            garage_size: 1,
            gas_types: vec!["natural".to_string()],
            amenities: vec!["fireplace".to_string(), "cellar".to_string()],
            extras: vec![],
            utilities: vec!["water".to_string(), "electricity".to_string()],
            notes: "South-facing garden".to_string(),
            owner_id: 3,
            user_id: 1,
            property_type: PropertyType::House,
            transaction_type: TransactionType::Sale,
            status: PropertyStatus::Available,
        }
    }

    #[actix_web::test]
    async fn create_then_get_returns_equal_fields() {
        let (service, _) = service();

        let created = service.create_property(cottage()).await.unwrap();
        let fetched = service.get_property_by_id(created.id).await.unwrap();

        assert_eq!(fetched.title, "Stone cottage with garden");
        assert_eq!(fetched.address, "12 Mill Lane");
        assert_eq!(fetched.price, 184_500.0);
        assert_eq!(fetched.amenities, vec!["fireplace", "cellar"]);
        assert_eq!(fetched.extras, Vec::<String>::new());
        assert_eq!(fetched.property_type, PropertyType::House);
        assert_eq!(fetched.status, PropertyStatus::Available);
    }

    #[actix_web::test]
    async fn non_positive_price_never_reaches_the_store() {
        let (service, store) = service();

        for price in [0.0, -150.0] {
            let result = service
                .create_property(PropertyRequest {
                    price,
                    ..cottage()
                })
                .await;
            assert!(matches!(result, Err(ApiError::BadRequest(_))));
        }
        assert_eq!(store.create_calls(), 0);
    }

    #[actix_web::test]
    async fn empty_address_never_reaches_the_store() {
        let (service, store) = service();

        let result = service
            .create_property(PropertyRequest {
                address: String::new(),
                ..cottage()
            })
            .await;

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
        assert_eq!(store.create_calls(), 0);
    }

    #[actix_web::test]
    async fn update_requires_a_positive_id() {
        let (service, _) = service();

        let result = service.update_property(0, cottage()).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[actix_web::test]
    async fn update_validates_before_touching_the_store() {
        let (service, _) = service();
        let created = service.create_property(cottage()).await.unwrap();

        let result = service
            .update_property(
                created.id,
                PropertyRequest {
                    price: -1.0,
                    ..cottage()
                },
            )
            .await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));

        // The stored record is untouched.
        let fetched = service.get_property_by_id(created.id).await.unwrap();
        assert_eq!(fetched.price, 184_500.0);
    }

    #[actix_web::test]
    async fn update_is_a_full_replace() {
        let (service, _) = service();
        let created = service.create_property(cottage()).await.unwrap();

        let replacement = PropertyRequest {
            title: "Renovated stone cottage".to_string(),
            price: 199_000.0,
            amenities: vec![],
            status: PropertyStatus::Reserved,
            ..cottage()
        };
        let updated = service
            .update_property(created.id, replacement)
            .await
            .unwrap();

        assert_eq!(updated.title, "Renovated stone cottage");
        assert_eq!(updated.price, 199_000.0);
        // Fields absent from the replacement are replaced, not merged.
        assert!(updated.amenities.is_empty());
        assert_eq!(updated.status, PropertyStatus::Reserved);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[actix_web::test]
    async fn update_on_missing_id_is_not_found() {
        let (service, _) = service();

        let result = service.update_property(99, cottage()).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[actix_web::test]
    async fn delete_requires_a_positive_id() {
        let (service, _) = service();

        assert!(matches!(
            service.delete_property(0).await,
            Err(ApiError::BadRequest(_))
        ));
    }

    #[actix_web::test]
    async fn deleted_property_disappears_from_reads() {
        let (service, _) = service();
        let created = service.create_property(cottage()).await.unwrap();

        service.delete_property(created.id).await.unwrap();

        assert!(matches!(
            service.get_property_by_id(created.id).await,
            Err(ApiError::NotFound(_))
        ));
        assert!(service.get_all_properties().await.unwrap().is_empty());

        // Updating a soft-deleted row fails too.
        assert!(matches!(
            service.update_property(created.id, cottage()).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn empty_store_lists_nothing() {
        let (service, _) = service();
        assert!(service.get_all_properties().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn status_may_move_freely_between_values() {
        let (service, _) = service();
        let created = service.create_property(cottage()).await.unwrap();

        for status in [
            PropertyStatus::Sold,
            PropertyStatus::Available,
            PropertyStatus::Rented,
        ] {
            let updated = service
                .update_property(
                    created.id,
                    PropertyRequest {
                        status,
                        ..cottage()
                    },
                )
                .await
                .unwrap();
            assert_eq!(updated.status, status);
        }
    }
}
