use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;
use tracing::{debug, error};

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum Error {
    /// The entity targeted by the request does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// A foreign id supplied in the request body does not resolve.
    #[error("unknown {0}")]
    InvalidReference(&'static str),
    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),
    /// A uniqueness rule was violated.
    #[error("{0}")]
    Conflict(String),
    #[error("invalid credentials")]
    Unauthorized,
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "not_found".to_string()),
            Error::InvalidReference(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),
            Error::Unauthorized | Error::Jwt(_) => {
                debug!("Authentication rejected: {}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    "invalid credentials".to_string(),
                )
            }
            // Constraint breaches reach us as store errors; everything
            // else store-side is an opaque infrastructure failure.
            Error::DbErr(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    (StatusCode::CONFLICT, "already exists".to_string())
                }
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => (
                    StatusCode::CONFLICT,
                    "operation violates a reference constraint".to_string(),
                ),
                _ => {
                    error!("Database error: {}", e);

                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal server error".to_string(),
                    )
                }
            },
            Error::MissingEnvVar(_) | Error::InvalidEnvValue { .. } => {
                error!("Configuration error: {}", self);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
