use async_trait::async_trait;
use tokio::sync::RwLock;

use shopfront_core::persistence::{
    decode_snapshot, encode_snapshot, PersistenceError, StateRepository,
};
use shopfront_core::store::PersistedState;

/// Keeps the encoded snapshot in memory, so it goes through the same codec as
/// the SQL repository.
#[derive(Default)]
pub struct InMemoryStateRepository {
    payload: RwLock<Option<String>>,
}

impl InMemoryStateRepository {
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self { payload: RwLock::new(Some(payload.into())) }
    }

    pub async fn payload(&self) -> Option<String> {
        self.payload.read().await.clone()
    }
}

#[async_trait]
impl StateRepository for InMemoryStateRepository {
    async fn load(&self) -> Result<Option<PersistedState>, PersistenceError> {
        let payload = self.payload.read().await;
        payload.as_deref().map(decode_snapshot).transpose()
    }

    async fn save(&self, state: &PersistedState) -> Result<(), PersistenceError> {
        let encoded = encode_snapshot(state)?;
        *self.payload.write().await = Some(encoded);
        Ok(())
    }
}
