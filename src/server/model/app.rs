use sea_orm::DatabaseConnection;

use crate::server::{model::auth::AuthConfig, service::population::client::CatalogClient};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub catalog: CatalogClient,
    pub auth: AuthConfig,
}
