//! Declarative test builder.
//!
//! Configuration methods queue work which is executed in order by [`TestBuilder::build`]:
//! schema first, then database fixtures, then mock catalog endpoints.

use migration::{Migrator, MigratorTrait};
use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization
pub struct TestBuilder {
    // Schema
    run_migrations: bool,

    // Database fixtures to insert
    users: Vec<String>,
    characters: Vec<String>,
    planets: Vec<String>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    people_list_endpoints: Vec<(Vec<i64>, usize)>,
    planet_list_endpoints: Vec<(Vec<i64>, usize)>,
    person_endpoints: Vec<(i64, Value, usize)>,
    planet_endpoints: Vec<(i64, Value, usize)>,
}

impl TestBuilder {
    /// Creates a builder with no schema, fixtures, or endpoints configured
    pub fn new() -> Self {
        Self {
            run_migrations: false,
            users: Vec::new(),
            characters: Vec::new(),
            planets: Vec::new(),
            mock_builders: Vec::new(),
            people_list_endpoints: Vec::new(),
            planet_list_endpoints: Vec::new(),
            person_endpoints: Vec::new(),
            planet_endpoints: Vec::new(),
        }
    }

    /// Applies every migration to the test database.
    ///
    /// Migrations create the composite unique index on favorites and the cascading foreign key,
    /// neither of which can be derived from the entities alone.
    pub fn with_tables(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Inserts a user with the given username, see [`UserFixtures::insert_user`](crate::fixtures::user::UserFixtures::insert_user)
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Inserts a character with the given name and factory values
    pub fn with_character(mut self, name: impl Into<String>) -> Self {
        self.characters.push(name.into());
        self
    }

    /// Inserts a planet with the given name and factory values
    pub fn with_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Adds a `/people/` summary list endpoint listing the given uids.
    ///
    /// # Arguments
    /// - `uids` - Catalog uids to list, each summary links to `/people/{uid}` on the mock server
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_people_list_endpoint(mut self, uids: Vec<i64>, expected_requests: usize) -> Self {
        self.people_list_endpoints.push((uids, expected_requests));
        self
    }

    /// Adds a `/planets/` summary list endpoint listing the given uids
    pub fn with_planet_list_endpoint(mut self, uids: Vec<i64>, expected_requests: usize) -> Self {
        self.planet_list_endpoints.push((uids, expected_requests));
        self
    }

    /// Adds a `/people/{uid}` detail endpoint returning `properties` inside the result envelope
    pub fn with_person_endpoint(
        mut self,
        uid: i64,
        properties: Value,
        expected_requests: usize,
    ) -> Self {
        self.person_endpoints
            .push((uid, properties, expected_requests));
        self
    }

    /// Adds a `/planets/{uid}` detail endpoint returning `detail` as a flat object
    pub fn with_planet_endpoint(
        mut self,
        uid: i64,
        detail: Value,
        expected_requests: usize,
    ) -> Self {
        self.planet_endpoints.push((uid, detail, expected_requests));
        self
    }

    /// Adds a custom mock endpoint with full control over the mock server
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Builds the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment
    /// - `Err(TestError::DbErr)` - Schema creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Schema
        if self.run_migrations {
            Migrator::up(&setup.db, None).await?;
        }

        // 2. Database fixtures
        for username in self.users {
            setup.user().insert_user(&username).await?;
        }

        for name in self.characters {
            setup.catalog().insert_character(&name).await?;
        }

        for name in self.planets {
            setup.catalog().insert_planet(&name).await?;
        }

        // 3. Mock endpoints, custom ones first so tests can queue an error ahead of a success
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (uids, expected) in self.people_list_endpoints {
            mocks.push(
                setup
                    .catalog()
                    .create_list_endpoint("people", &uids, expected),
            );
        }

        for (uids, expected) in self.planet_list_endpoints {
            mocks.push(
                setup
                    .catalog()
                    .create_list_endpoint("planets", &uids, expected),
            );
        }

        for (uid, properties, expected) in self.person_endpoints {
            mocks.push(
                setup
                    .catalog()
                    .create_person_endpoint(uid, &properties, expected),
            );
        }

        for (uid, detail, expected) in self.planet_endpoints {
            mocks.push(
                setup
                    .catalog()
                    .create_planet_endpoint(uid, &detail, expected),
            );
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
