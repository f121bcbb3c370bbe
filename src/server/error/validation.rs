use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ValidationErrorDto, server::data::hydrate::RejectedField};

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Required fields are absent from the request
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    /// Fields are present but could not be read as their declared type
    #[error("Invalid fields: {}", describe(.0))]
    InvalidFields(Vec<RejectedField>),
}

fn describe(rejected: &[RejectedField]) -> String {
    rejected
        .iter()
        .map(|field| format!("{} ({})", field.name, field.reason))
        .collect::<Vec<_>>()
        .join(", ")
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let dto = match self {
            Self::MissingFields(fields) => ValidationErrorDto {
                error: "Please provide all required fields.".to_string(),
                fields,
            },
            Self::InvalidFields(rejected) => ValidationErrorDto {
                error: "Some fields have an invalid value.".to_string(),
                fields: rejected.into_iter().map(|field| field.name).collect(),
            },
        };

        (StatusCode::BAD_REQUEST, Json(dto)).into_response()
    }
}
