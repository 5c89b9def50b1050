use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::PersistedState;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("storage failure: {0}")]
    Storage(String),
    #[error("stored state is corrupt: {0}")]
    Corrupt(String),
    #[error("stored state has version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },
    #[error("state could not be encoded: {0}")]
    Encode(String),
}

/// Durable home of the combined catalog and cart state.
///
/// `load` returns `Ok(None)` when nothing was ever saved.
#[async_trait]
pub trait StateRepository: Send + Sync {
    async fn load(&self) -> Result<Option<PersistedState>, PersistenceError>;
    async fn save(&self, state: &PersistedState) -> Result<(), PersistenceError>;
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    state: &'a PersistedState,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u32,
    state: PersistedState,
}

pub fn encode_snapshot(state: &PersistedState) -> Result<String, PersistenceError> {
    serde_json::to_string(&SnapshotRef { version: SNAPSHOT_VERSION, saved_at: Utc::now(), state })
        .map_err(|error| PersistenceError::Encode(error.to_string()))
}

pub fn decode_snapshot(raw: &str) -> Result<PersistedState, PersistenceError> {
    let snapshot: Snapshot =
        serde_json::from_str(raw).map_err(|error| PersistenceError::Corrupt(error.to_string()))?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    Ok(snapshot.state)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::cart::{CartEntry, CartState};
    use crate::domain::catalog::CatalogState;
    use crate::domain::product::{Product, ProductId, Rating};
    use crate::store::PersistedState;

    use super::{decode_snapshot, encode_snapshot, PersistenceError};

    fn sample_state() -> PersistedState {
        let product = Product {
            id: ProductId(5),
            title: "John Hardy Women's Legends Naga Bracelet".to_string(),
            price: Decimal::new(695, 0),
            description: "From our Legends Collection".to_string(),
            category: "jewelery".to_string(),
            image: "https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg".to_string(),
            rating: Rating { rate: Decimal::new(46, 1), count: 400 },
        };
        PersistedState {
            catalog: CatalogState::new(vec![product.clone()]),
            cart: CartState::new(vec![CartEntry { product, quantity: 3 }]),
        }
    }

    #[test]
    fn snapshot_round_trip_preserves_state() {
        let state = sample_state();
        let raw = encode_snapshot(&state).expect("encode");

        assert_eq!(decode_snapshot(&raw).expect("decode"), state);
    }

    #[test]
    fn garbage_is_reported_as_corrupt() {
        let error = decode_snapshot("{not json").expect_err("garbage must not decode");
        assert!(matches!(error, PersistenceError::Corrupt(_)));
    }

    #[test]
    fn future_versions_are_rejected() {
        let error = decode_snapshot(r#"{"version":9,"state":{"catalog":[],"cart":[]}}"#)
            .expect_err("unknown version");

        assert_eq!(error, PersistenceError::UnsupportedVersion { found: 9, expected: 1 });
    }

    #[test]
    fn missing_sections_decode_as_empty() {
        let state = decode_snapshot(r#"{"version":1,"state":{}}"#).expect("decode");
        assert_eq!(state, PersistedState::default());
    }
}
