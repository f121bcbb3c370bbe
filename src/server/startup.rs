use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{
    config::Config, error::Error, model::auth::AuthConfig,
    service::population::client::CatalogClient,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Build the HTTP client for the external catalog
pub fn build_catalog_client(config: &Config) -> Result<CatalogClient, Error> {
    CatalogClient::new(
        &config.catalog_base_url,
        Duration::from_secs(config.catalog_timeout_secs),
        config.catalog_concurrency,
    )
    .map_err(|e| Error::InternalError(format!("Failed to build catalog client: {}", e)))
}

/// Build the signing keys for bearer tokens
pub fn build_auth_config(config: &Config) -> AuthConfig {
    AuthConfig::new(&config.jwt_secret, config.jwt_expiry_secs)
}
