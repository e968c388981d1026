use utoipa::OpenApi;

use crate::models::{
    CreateUserRequest, LoginRequest, Property, PropertyRequest, PropertyStatus, PropertyType,
    TransactionType, UpdateUserRequest, UserResponse,
};

/// OpenAPI documentation for the realty API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Realty API",
        version = "1.0.0",
        description = "REST API for a real-estate listing service: user accounts and property listings."
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User account endpoints (login, CRUD)"),
        (name = "Properties", description = "Property listing endpoints (CRUD)")
    ),
    paths(
        crate::handlers::health,
        crate::handlers::health_detailed,
        crate::handlers::ping,
        crate::handlers::login,
        crate::handlers::get_users,
        crate::handlers::get_user,
        crate::handlers::create_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::handlers::get_properties,
        crate::handlers::get_property,
        crate::handlers::create_property,
        crate::handlers::update_property,
        crate::handlers::delete_property
    ),
    components(
        schemas(
            LoginRequest,
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            Property,
            PropertyRequest,
            PropertyType,
            TransactionType,
            PropertyStatus
        )
    )
)]
pub struct ApiDoc;
