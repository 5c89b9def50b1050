use serde::{Deserialize, Serialize};

use crate::domain::cart::CartState;
use crate::domain::catalog::CatalogState;

/// Catalog and cart, persisted and restored together as one blob.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub catalog: CatalogState,
    #[serde(default)]
    pub cart: CartState,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub duplicate_products: usize,
    pub dropped_cart_entries: usize,
}

impl NormalizeReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_products == 0 && self.dropped_cart_entries == 0
    }
}

impl PersistedState {
    /// Repairs a rehydrated state so the store invariants hold again.
    pub fn normalize(&mut self) -> NormalizeReport {
        NormalizeReport {
            duplicate_products: self.catalog.dedup_by_id(),
            dropped_cart_entries: self.cart.normalize(),
        }
    }
}
