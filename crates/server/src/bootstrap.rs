use std::sync::Arc;

use shopfront_catalog::{CatalogClientError, HttpCatalogClient};
use shopfront_core::config::{AppConfig, ConfigError, LoadOptions};
use shopfront_core::storefront::{Storefront, StorefrontSettings};
use shopfront_db::{connect_storage, migrations, DbPool, SqlStateRepository};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub db_pool: DbPool,
    pub storefront: Arc<Storefront>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database connection failed: {0}")]
    DatabaseConnect(#[source] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[source] sqlx::migrate::MigrateError),
    #[error("catalog client setup failed: {0}")]
    Catalog(#[from] CatalogClientError),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

/// Wires the storefront against SQLite and the HTTP catalog. Rehydration is
/// left to the caller so views can show the loading gate meanwhile.
pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let db_pool = connect_storage(&config.storage).await.map_err(BootstrapError::DatabaseConnect)?;
    info!(
        event_name = "system.bootstrap.database_connected",
        correlation_id = "bootstrap",
        "database connection established"
    );

    migrations::run_pending(&db_pool).await.map_err(BootstrapError::Migration)?;
    info!(
        event_name = "system.bootstrap.migrations_applied",
        correlation_id = "bootstrap",
        "database migrations applied"
    );

    let catalog = HttpCatalogClient::new(&config.catalog)?;
    let repository = SqlStateRepository::new(db_pool.clone(), config.storage.state_key.clone());
    let storefront = Storefront::new(
        Arc::new(catalog),
        Arc::new(repository),
        StorefrontSettings { search_debounce: config.search.debounce() },
    );

    Ok(Application { config, db_pool, storefront: Arc::new(storefront) })
}
