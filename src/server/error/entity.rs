use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum EntityError {
    /// A uniqueness constraint would be violated
    #[error("{entity} already exists: {detail}")]
    AlreadyExists { entity: &'static str, detail: String },
    /// No row with the given id
    #[error("{entity} ID {id} not found")]
    NotFound { entity: &'static str, id: i32 },
}

impl IntoResponse for EntityError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::AlreadyExists { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
