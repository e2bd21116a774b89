//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Every variant belongs to one [`ErrorKind`], the coarse taxonomy callers receive
//! alongside the message.

pub mod config;
pub mod mission;
pub mod not_found;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ErrorKind},
    server::error::{
        config::ConfigError, mission::MissionFormatError, not_found::NotFoundError,
        validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Caller input broke a domain rule.
    ///
    /// Results in 400 Bad Request with the validation message.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Drone or mission file does not exist.
    ///
    /// Results in 404 Not Found.
    #[error(transparent)]
    NotFoundErr(#[from] NotFoundError),

    /// Waypoint file rejected by the mission parser.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    FormatErr(#[from] MissionFormatError),

    /// The upload carried no file content.
    ///
    /// Results in 400 Bad Request.
    #[error("{0}")]
    Upload(String),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Mission-file store or listener I/O error.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Classifies the error for callers.
    ///
    /// # Returns
    /// - `ErrorKind` - Taxonomy bucket reported in the response body
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ValidationErr(_) => ErrorKind::ValidationError,
            Self::NotFoundErr(_) => ErrorKind::NotFoundError,
            Self::FormatErr(_) => ErrorKind::FormatError,
            Self::Upload(_) => ErrorKind::UploadError,
            Self::DbErr(_) | Self::IoErr(_) => ErrorKind::StorageError,
            Self::ConfigErr(_) | Self::InternalError(_) => ErrorKind::InternalError,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Storage and internal errors are logged with full details but return generic
/// messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For validation, format and upload errors
/// - 404 Not Found - For missing drones and mission files
/// - 500 Internal Server Error - For all other error types (DbErr, IoErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = match kind {
            ErrorKind::NotFoundError => StatusCode::NOT_FOUND,
            ErrorKind::ValidationError | ErrorKind::FormatError | ErrorKind::UploadError => {
                StatusCode::BAD_REQUEST
            }
            ErrorKind::StorageError | ErrorKind::InternalError => {
                tracing::error!("{}", self);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new(kind, "Internal server error")),
                )
                    .into_response();
            }
        };

        (status, Json(ErrorDto::new(kind, self.to_string()))).into_response()
    }
}
