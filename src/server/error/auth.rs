use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request is missing a bearer token")]
    MissingCredentials,
    #[error("Bearer token is invalid or expired: {0}")]
    InvalidToken(String),
    #[error("Invalid username or password")]
    InvalidLogin,
}

impl AuthError {
    fn unauthorized(message: &str) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingCredentials => {
                tracing::debug!("{}", self);

                Self::unauthorized("Missing authorization")
            }
            Self::InvalidToken(_) => {
                tracing::debug!("{}", self);

                Self::unauthorized("Invalid or expired token")
            }
            Self::InvalidLogin => Self::unauthorized("Invalid username or password."),
        }
    }
}
