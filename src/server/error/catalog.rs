use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog listing could not be fetched, nothing was imported
    #[error("Catalog service unavailable: {0}")]
    Unavailable(String),
    /// Transport failure or timeout for a single request
    #[error("Catalog request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// Non-success status for a single request
    #[error("Catalog request to {url} returned status {status}")]
    Status { url: String, status: u16 },
    /// Response body did not have the expected shape
    #[error("Catalog response from {url} could not be read: {reason}")]
    InvalidPayload { url: String, reason: String },
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "The external catalog service is unavailable".to_string(),
            }),
        )
            .into_response()
    }
}
