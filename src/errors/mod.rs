//! Application error type and its HTTP mapping.

use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use sqlx::error::DatabaseError;
use std::fmt;

use crate::constants::{ERR_DUPLICATE_FIELD, ERR_INTERNAL, ERR_RECORD_NOT_FOUND};

/// Error body returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, PartialEq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
    ValidationError(Vec<String>),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(message) => write!(f, "Bad Request: {}", message),
            ApiError::Unauthorized(message) => write!(f, "Unauthorized: {}", message),
            ApiError::NotFound(message) => write!(f, "Not Found: {}", message),
            ApiError::Conflict(message) => write!(f, "Conflict: {}", message),
            ApiError::InternalServerError(message) => {
                write!(f, "Internal Server Error: {}", message)
            }
            ApiError::ValidationError(errors) => write!(f, "Validation Error: {:?}", errors),
        }
    }
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest(message) => HttpResponse::BadRequest().json(ErrorResponse {
                success: false,
                message: message.clone(),
                errors: None,
            }),
            ApiError::Unauthorized(message) => HttpResponse::Unauthorized().json(ErrorResponse {
                success: false,
                message: message.clone(),
                errors: None,
            }),
            ApiError::NotFound(message) => HttpResponse::NotFound().json(ErrorResponse {
                success: false,
                message: message.clone(),
                errors: None,
            }),
            ApiError::Conflict(message) => HttpResponse::Conflict().json(ErrorResponse {
                success: false,
                message: message.clone(),
                errors: None,
            }),
            ApiError::InternalServerError(message) => {
                HttpResponse::InternalServerError().json(ErrorResponse {
                    success: false,
                    message: message.clone(),
                    errors: None,
                })
            }
            ApiError::ValidationError(errors) => HttpResponse::BadRequest().json(ErrorResponse {
                success: false,
                message: "Validation failed".to_string(),
                errors: Some(errors.clone()),
            }),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => ApiError::NotFound(ERR_RECORD_NOT_FOUND.to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                ApiError::Conflict(ERR_DUPLICATE_FIELD.to_string())
            }
            // Full detail stays in the server log; clients get a generic message.
            _ => {
                error!("Database error: {}", err);
                ApiError::InternalServerError(ERR_INTERNAL.to_string())
            }
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        error!("Password hashing error: {}", err);
        ApiError::InternalServerError(ERR_INTERNAL.to_string())
    }
}
