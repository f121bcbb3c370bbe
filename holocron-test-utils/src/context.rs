//! Test context returned by [`TestBuilder`](crate::TestBuilder).
//!
//! The context holds an in-memory SQLite database and a mock HTTP server standing in for the
//! external character and planet catalog.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment built by [`TestBuilder`](crate::TestBuilder)
///
/// ```ignore
/// let mut test = TestBuilder::new().with_tables().build().await?;
///
/// let user = test.user().insert_user("luke").await?;
/// let client = CatalogClient::new(&test.catalog_url(), timeout, 4)?;
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to an in-memory SQLite database
    pub db: DatabaseConnection,

    /// Mock HTTP server for catalog endpoints
    pub(crate) server: ServerGuard,
    /// Mock endpoints created by the builder, kept alive for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Creates an empty database and starts the mock catalog server
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            server,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock catalog, without a trailing slash
    pub fn catalog_url(&self) -> String {
        self.server.url()
    }

    /// Direct access to the mock server for endpoints created after build
    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
