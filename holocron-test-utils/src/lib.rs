//! Test utilities shared by the unit and integration tests.
//!
//! Tests are set up in two phases. [`TestBuilder`] declares the database schema, fixtures, and
//! mock catalog endpoints a test needs; [`TestBuilder::build`] applies them and returns a
//! [`TestContext`] which the test then uses for further fixtures and assertions.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_JWT_EXPIRY_SECS, TEST_JWT_SECRET, TEST_PASSWORD},
        fixtures::catalog::factory,
        TestBuilder, TestContext, TestError,
    };
}
