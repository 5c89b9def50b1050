use thiserror::Error;

use shopfront_core::persistence::PersistenceError;

pub mod memory;
pub mod state;

pub use memory::InMemoryStateRepository;
pub use state::SqlStateRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<RepositoryError> for PersistenceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::Database(error) => Self::Storage(error.to_string()),
            RepositoryError::Decode(message) => Self::Corrupt(message),
        }
    }
}
