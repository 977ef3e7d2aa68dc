use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use mongodb::bson;
use mongodb::error::Error as MongoError;
use thiserror::Error;

/// Request-boundary error taxonomy: validation (400), unauthorized (401),
/// not-found (404) and storage/serialization failures (500). No retries, no
/// compensation; every error surfaces to the caller with a message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error(transparent)]
    MongoError(#[from] MongoError),

    #[error("Serialization error")]
    SerializationError(#[from] bson::ser::Error),

    #[error("Deserialization error")]
    DeserializationError(#[from] bson::de::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_)
            | ApiError::MongoError(_)
            | ApiError::SerializationError(_)
            | ApiError::DeserializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::BadRequest(message) => {
                HttpResponse::BadRequest().json(serde_json::json!({
                    "message": message
                }))
            }
            ApiError::Unauthorized(message) => {
                HttpResponse::Unauthorized().json(serde_json::json!({
                    "message": message
                }))
            }
            ApiError::NotFound(message) => {
                HttpResponse::NotFound().json(serde_json::json!({
                    "message": message
                }))
            }
            ApiError::InternalServerError(message) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "message": "Server error",
                    "error": message
                }))
            }
            ApiError::MongoError(error) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "message": "Server error",
                    "error": error.to_string()
                }))
            }
            ApiError::SerializationError(error) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "message": "Server error",
                    "error": error.to_string()
                }))
            }
            ApiError::DeserializationError(error) => {
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "message": "Server error",
                    "error": error.to_string()
                }))
            }
        }
    }
}
