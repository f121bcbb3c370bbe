//! Mock catalog endpoints.
//!
//! Each endpoint verifies it was called exactly `expected_requests` times when
//! [`TestContext::assert_mocks`](crate::TestContext::assert_mocks) runs.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::fixtures::catalog::{factory, CatalogFixtures};

impl<'a> CatalogFixtures<'a> {
    /// Creates `GET /{resource}/` returning a summary list of `uids`.
    ///
    /// Any `page` and `limit` query is accepted, tests asserting the exact query should use
    /// [`TestBuilder::with_mock_endpoint`](crate::TestBuilder::with_mock_endpoint).
    pub fn create_list_endpoint(
        &mut self,
        resource: &str,
        uids: &[i64],
        expected_requests: usize,
    ) -> Mock {
        let body = factory::summary_list(&self.setup.server.url(), resource, uids);
        let path = format!("/{}/", resource);

        self.setup
            .server
            .mock("GET", path.as_str())
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Creates `GET /people/{uid}` returning `properties` inside the detail envelope
    pub fn create_person_endpoint(
        &mut self,
        uid: i64,
        properties: &Value,
        expected_requests: usize,
    ) -> Mock {
        let body = factory::person_envelope(uid, properties);
        let path = format!("/people/{}", uid);

        self.setup
            .server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Creates `GET /planets/{uid}` returning `detail` as is
    pub fn create_planet_endpoint(
        &mut self,
        uid: i64,
        detail: &Value,
        expected_requests: usize,
    ) -> Mock {
        let path = format!("/planets/{}", uid);

        self.setup
            .server
            .mock("GET", path.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(detail.to_string())
            .expect(expected_requests)
            .create()
    }
}
