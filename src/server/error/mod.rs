//! Error types for the holocron server.
//!
//! Each domain (authentication, configuration, field validation, stored entities, the external
//! catalog) has its own error enum which knows how to render itself as an HTTP response. The
//! top level [`Error`] aggregates them together with errors from external libraries so that
//! handlers and services can propagate everything with `?`.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod entity;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, catalog::CatalogError, config::ConfigError, entity::EntityError,
        validation::ValidationError,
    },
};

/// Main error type for the holocron server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication errors (bearer token, login credentials)
/// - Validation errors (missing or unreadable request fields)
/// - Entity errors (already exists, not found)
/// - Catalog errors (external catalog service unreachable or returned garbage)
/// - External library errors (database, password hashing, token encoding)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing/invalid token, bad login).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request fields missing or of the wrong type.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Uniqueness or lookup failure for a stored entity.
    #[error(transparent)]
    EntityError(#[from] EntityError),
    /// External catalog service failure.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(String),
    /// Internal error indicating a bug in holocron's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Token encoding error.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    /// Failure binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors render their own responses; everything else is an internal server error.
///
/// # Returns
/// - 400 Bad Request - Missing or invalid request fields
/// - 401 Unauthorized - Missing/invalid bearer token or bad credentials
/// - 404 Not Found - Requested entity does not exist
/// - 409 Conflict - Entity already exists
/// - 502 Bad Gateway - External catalog unavailable
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::EntityError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
