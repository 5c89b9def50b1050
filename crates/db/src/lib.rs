pub mod connection;
pub mod migrations;
pub mod repositories;

pub use connection::{connect_storage, connect_with_settings, DbPool};
pub use repositories::{InMemoryStateRepository, RepositoryError, SqlStateRepository};
