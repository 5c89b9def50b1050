use std::future::Future;
use std::sync::Arc;

use shopfront_catalog::HttpCatalogClient;
use shopfront_core::config::{AppConfig, LoadOptions};
use shopfront_core::errors::ApplicationError;
use shopfront_core::storefront::{Storefront, StorefrontSettings};
use shopfront_db::{connect_storage, migrations, SqlStateRepository};

use crate::commands::CommandResult;

pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_RUNTIME: u8 = 3;
pub const EXIT_DB: u8 = 4;
pub const EXIT_MIGRATION: u8 = 5;
pub const EXIT_CATALOG: u8 = 6;
pub const EXIT_INVALID_INPUT: u8 = 7;
pub const EXIT_PERSISTENCE: u8 = 8;
pub const EXIT_NOT_FOUND: u8 = 9;

/// Loads config, opens and migrates storage, rehydrates a storefront and hands
/// it to `body` on a current-thread runtime.
pub fn with_storefront<F, Fut>(command: &str, body: F) -> CommandResult
where
    F: FnOnce(Arc<Storefront>) -> Fut,
    Fut: Future<Output = CommandResult>,
{
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                command,
                "config_validation",
                format!("configuration issue: {error}"),
                EXIT_CONFIG,
            );
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                command,
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                EXIT_RUNTIME,
            );
        }
    };

    runtime.block_on(async {
        let pool = match connect_storage(&config.storage).await {
            Ok(pool) => pool,
            Err(error) => {
                return CommandResult::failure(
                    command,
                    "db_connectivity",
                    error.to_string(),
                    EXIT_DB,
                );
            }
        };
        if let Err(error) = migrations::run_pending(&pool).await {
            return CommandResult::failure(command, "migration", error.to_string(), EXIT_MIGRATION);
        }

        let catalog = match HttpCatalogClient::new(&config.catalog) {
            Ok(catalog) => catalog,
            Err(error) => {
                return CommandResult::failure(
                    command,
                    "catalog_client",
                    error.to_string(),
                    EXIT_CATALOG,
                );
            }
        };
        let repository = SqlStateRepository::new(pool.clone(), config.storage.state_key.clone());
        let storefront = Arc::new(Storefront::new(
            Arc::new(catalog),
            Arc::new(repository),
            StorefrontSettings { search_debounce: config.search.debounce() },
        ));
        storefront.hydrate().await;

        let result = body(storefront).await;
        pool.close().await;
        result
    })
}

pub fn application_failure(command: &str, error: ApplicationError) -> CommandResult {
    let (error_class, exit_code) = match &error {
        ApplicationError::Domain(_) => ("invalid_input", EXIT_INVALID_INPUT),
        ApplicationError::Persistence(_) => ("persistence", EXIT_PERSISTENCE),
        ApplicationError::Integration(_) => ("catalog_fetch", EXIT_CATALOG),
        ApplicationError::Configuration(_) => ("config_validation", EXIT_CONFIG),
    };
    CommandResult::failure(command, error_class, error.to_string(), exit_code)
}
