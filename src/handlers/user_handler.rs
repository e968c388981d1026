//! User management handlers: login plus CRUD.

use actix_web::{web, HttpResponse};
use log::{debug, info, warn};
use validator::Validate;

use crate::constants::{
    ERR_INVALID_USER_ID, MSG_LOGIN_SUCCESS, MSG_USERS_RETRIEVED, MSG_USER_CREATED,
    MSG_USER_FOUND, MSG_USER_UPDATED,
};
use crate::errors::ApiError;
use crate::models::{
    ApiResponse, CreateUserRequest, ListResponse, LoginRequest, UpdateUserRequest, UserResponse,
};
use crate::services::AccountService;
use crate::utils::log_sanitizer::mask_email;
use crate::validators::validation_errors_to_api_error;

fn parse_user_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| {
        warn!("Rejected non-numeric user id: {}", raw);
        ApiError::BadRequest(ERR_INVALID_USER_ID.to_string())
    })
}

/// Verify a user's credentials
#[utoipa::path(
    post,
    path = "/api/v1/users/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    account_service: web::Data<AccountService>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    debug!("Login attempt for {}", mask_email(&body.email));
    account_service.login(&body.email, &body.password).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_LOGIN_SUCCESS)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = [UserResponse])
    )
)]
pub async fn get_users(
    account_service: web::Data<AccountService>,
) -> Result<HttpResponse, ApiError> {
    let users = account_service.get_all_users().await?;
    info!("Retrieved {} users", users.len());

    Ok(HttpResponse::Ok().json(ListResponse::new(MSG_USERS_RETRIEVED, users)))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Non-numeric ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    account_service: web::Data<AccountService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path.into_inner())?;

    let user = account_service.get_user_by_id(id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_USER_FOUND, user)))
}

/// Register a new user account
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn create_user(
    account_service: web::Data<AccountService>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let user = account_service.register(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(MSG_USER_CREATED, user)))
}

/// Replace a user's username and email
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn update_user(
    account_service: web::Data<AccountService>,
    path: web::Path<String>,
    body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path.into_inner())?;
    body.validate().map_err(validation_errors_to_api_error)?;

    let user = account_service.update_user(id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(MSG_USER_UPDATED, user)))
}

/// Soft-delete a user account
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Non-numeric ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    account_service: web::Data<AccountService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_user_id(&path.into_inner())?;

    account_service.delete_user(id).await?;
    Ok(HttpResponse::NoContent().finish())
}
