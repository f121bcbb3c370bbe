//! Reqwest-backed client for the external character and planet catalog.
//!
//! The client owns transport details only: URLs, timeouts, status mapping, and unwrapping the
//! response envelopes. It never touches the database.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::server::{error::catalog::CatalogError, model::catalog::CatalogKind};

/// Entry of a catalog summary page
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CatalogSummary {
    /// Detail URL of the record
    pub url: String,
}

#[derive(Deserialize)]
struct SummaryPage {
    results: Vec<CatalogSummary>,
}

#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    concurrency: usize,
}

impl CatalogClient {
    /// Builds a client with a fixed timeout applied to every request.
    ///
    /// # Arguments
    /// - `base_url` - Catalog API root, e.g. `https://www.swapi.tech/api`
    /// - `timeout` - Timeout of each request
    /// - `concurrency` - Maximum number of detail requests in flight during an import, at least 1
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        concurrency: usize,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            concurrency: concurrency.max(1),
        })
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Fetches the summary page configured for `kind`
    ///
    /// # Returns
    /// - `Ok(Vec<CatalogSummary>)`: Summaries in catalog order
    /// - `Err(CatalogError::Request)`: Transport failure or timeout
    /// - `Err(CatalogError::Status)`: Non-success status
    /// - `Err(CatalogError::InvalidPayload)`: Body is not a summary page
    pub async fn fetch_summaries(
        &self,
        kind: CatalogKind,
    ) -> Result<Vec<CatalogSummary>, CatalogError> {
        let url = format!("{}/{}/", self.base_url, kind.resource());
        let query = [("page", kind.page()), ("limit", kind.limit())];

        let body = self.get_json(&url, &query).await?;
        let page: SummaryPage =
            serde_json::from_value(body).map_err(|e| CatalogError::InvalidPayload {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(
            kind = %kind,
            count = page.results.len(),
            "Fetched catalog summaries"
        );

        Ok(page.results)
    }

    /// Fetches a detail record and returns its properties.
    ///
    /// Character records are wrapped as `{result: {properties: {...}}}`. Planet records are flat,
    /// unless the body carries `result.properties` in which case that map is used.
    pub async fn fetch_detail(
        &self,
        kind: CatalogKind,
        url: &str,
    ) -> Result<Map<String, Value>, CatalogError> {
        let body = self.get_json(url, &[]).await?;

        extract_properties(kind, url, body)
    }

    async fn get_json(&self, url: &str, query: &[(&str, u32)]) -> Result<Value, CatalogError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| CatalogError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| CatalogError::InvalidPayload {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}

fn extract_properties(
    kind: CatalogKind,
    url: &str,
    body: Value,
) -> Result<Map<String, Value>, CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidPayload {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    let Value::Object(mut body) = body else {
        return Err(invalid("expected a JSON object"));
    };

    let nested = match body.get_mut("result").and_then(|r| r.get_mut("properties")) {
        Some(Value::Object(properties)) => Some(std::mem::take(properties)),
        _ => None,
    };

    match (kind, nested) {
        (_, Some(properties)) => Ok(properties),
        (CatalogKind::Character, None) => Err(invalid("missing result.properties")),
        (CatalogKind::Planet, None) => Ok(body),
    }
}
