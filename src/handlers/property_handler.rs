//! Property listing handlers.

use actix_web::{web, HttpResponse};
use log::warn;

use crate::constants::ERR_INVALID_PROPERTY_ID;
use crate::errors::ApiError;
use crate::models::{Property, PropertyRequest};
use crate::services::ListingService;

fn parse_property_id(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            warn!("Rejected property id: {}", raw);
            Err(ApiError::BadRequest(ERR_INVALID_PROPERTY_ID.to_string()))
        }
    }
}

/// List all property listings
#[utoipa::path(
    get,
    path = "/api/v1/properties",
    tag = "Properties",
    responses(
        (status = 200, description = "List of properties", body = [Property])
    )
)]
pub async fn get_properties(
    listing_service: web::Data<ListingService>,
) -> Result<HttpResponse, ApiError> {
    let properties = listing_service.get_all_properties().await?;
    Ok(HttpResponse::Ok().json(properties))
}

/// Get a property by ID
#[utoipa::path(
    get,
    path = "/api/v1/properties/{id}",
    tag = "Properties",
    params(
        ("id" = i64, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Property found", body = Property),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Property not found")
    )
)]
pub async fn get_property(
    listing_service: web::Data<ListingService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_property_id(&path.into_inner())?;

    let property = listing_service.get_property_by_id(id).await?;
    Ok(HttpResponse::Ok().json(property))
}

/// Create a property listing
#[utoipa::path(
    post,
    path = "/api/v1/properties",
    tag = "Properties",
    request_body = PropertyRequest,
    responses(
        (status = 201, description = "Property created", body = Property),
        (status = 400, description = "Invalid body or failed validation")
    )
)]
pub async fn create_property(
    listing_service: web::Data<ListingService>,
    body: web::Json<PropertyRequest>,
) -> Result<HttpResponse, ApiError> {
    let property = listing_service.create_property(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(property))
}

/// Replace a property listing
#[utoipa::path(
    put,
    path = "/api/v1/properties/{id}",
    tag = "Properties",
    params(
        ("id" = i64, Path, description = "Property ID")
    ),
    request_body = PropertyRequest,
    responses(
        (status = 200, description = "Property updated", body = Property),
        (status = 400, description = "Invalid body or failed validation"),
        (status = 404, description = "Property not found")
    )
)]
pub async fn update_property(
    listing_service: web::Data<ListingService>,
    path: web::Path<String>,
    body: web::Json<PropertyRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_property_id(&path.into_inner())?;

    let property = listing_service
        .update_property(id, body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(property))
}

/// Soft-delete a property listing
#[utoipa::path(
    delete,
    path = "/api/v1/properties/{id}",
    tag = "Properties",
    params(
        ("id" = i64, Path, description = "Property ID")
    ),
    responses(
        (status = 204, description = "Property deleted"),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Property not found")
    )
)]
pub async fn delete_property(
    listing_service: web::Data<ListingService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_property_id(&path.into_inner())?;

    listing_service.delete_property(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
