//! Helpers for building application state and authenticated requests in integration tests.

use std::time::Duration;

use holocron::{
    model::user::{NewUserDto, UserDto},
    server::{
        error::Error,
        model::{app::AppState, auth::AuthConfig},
        service::{auth::issue_token, population::client::CatalogClient, user::UserService},
    },
};
use holocron_test_utils::prelude::*;

/// Extension trait for TestContext to create the AppState handlers expect
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    /// Points the catalog client at the mock server and signs tokens with the test secret
    fn into_app_state(&self) -> AppState {
        let catalog = CatalogClient::new(&self.catalog_url(), Duration::from_secs(5), 4)
            .expect("Failed to build catalog client");

        AppState {
            db: self.db.clone(),
            catalog,
            auth: AuthConfig::new(TEST_JWT_SECRET, TEST_JWT_EXPIRY_SECS),
        }
    }
}

/// Registers a user whose password is [`TEST_PASSWORD`]
pub async fn register_user(test: &TestContext, username: &str) -> Result<UserDto, Error> {
    UserService::new(&test.db)
        .create_user(NewUserDto {
            name: Some(format!("{} test", username)),
            username: Some(username.to_string()),
            email: Some(format!("{}@example.com", username)),
            password: Some(TEST_PASSWORD.to_string()),
        })
        .await
}

/// `Authorization` header value for `user_id`
pub fn bearer(state: &AppState, user_id: i32) -> String {
    let token = issue_token(&state.auth, user_id).expect("Failed to issue token");

    format!("Bearer {}", token)
}
