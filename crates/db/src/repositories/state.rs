use chrono::Utc;
use sqlx::Row;

use shopfront_core::persistence::{
    decode_snapshot, encode_snapshot, PersistenceError, StateRepository,
};
use shopfront_core::store::PersistedState;

use super::RepositoryError;
use crate::DbPool;

/// Stores the whole storefront snapshot as one JSON payload under a fixed key.
pub struct SqlStateRepository {
    pool: DbPool,
    state_key: String,
}

impl SqlStateRepository {
    pub fn new(pool: DbPool, state_key: impl Into<String>) -> Self {
        Self { pool, state_key: state_key.into() }
    }

    async fn load_payload(&self) -> Result<Option<String>, RepositoryError> {
        let row = sqlx::query("SELECT payload FROM storefront_state WHERE state_key = ?")
            .bind(&self.state_key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| r.get::<String, _>("payload")))
    }

    async fn save_payload(&self, payload: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO storefront_state (state_key, payload, updated_at)
             VALUES (?, ?, ?)
             ON CONFLICT(state_key) DO UPDATE SET
                 payload = excluded.payload,
                 updated_at = excluded.updated_at",
        )
        .bind(&self.state_key)
        .bind(payload)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl StateRepository for SqlStateRepository {
    async fn load(&self) -> Result<Option<PersistedState>, PersistenceError> {
        match self.load_payload().await? {
            Some(payload) => decode_snapshot(&payload).map(Some),
            None => Ok(None),
        }
    }

    async fn save(&self, state: &PersistedState) -> Result<(), PersistenceError> {
        let payload = encode_snapshot(state)?;
        self.save_payload(&payload).await?;
        tracing::debug!(
            event_name = "store.persist.saved",
            state_key = %self.state_key,
            bytes = payload.len(),
            "storefront snapshot saved"
        );
        Ok(())
    }
}
