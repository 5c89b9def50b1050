use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductId};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Snapshot taken on first add; later catalog changes do not touch it.
    pub product: Product,
    pub quantity: u32,
}

impl CartEntry {
    /// Saturates at `Decimal::MAX` instead of overflowing.
    pub fn line_total(&self) -> Decimal {
        self.product.price.checked_mul(Decimal::from(self.quantity)).unwrap_or(Decimal::MAX)
    }
}

/// Cart entries keyed by product id, kept in first-add order.
///
/// Every entry has `quantity >= 1`; the reducer removes an entry instead of
/// storing zero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    entries: Vec<CartEntry>,
}

impl CartState {
    pub fn new(entries: Vec<CartEntry>) -> Self {
        Self { entries }
    }

    pub fn get(&self, product_id: ProductId) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.product.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.get(product_id).map(|entry| entry.quantity).unwrap_or(0)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.quantity)).sum()
    }

    /// Sum of `price * quantity`, unrounded and saturating. Recomputed on every call.
    pub fn total_amount(&self) -> Decimal {
        self.entries.iter().map(CartEntry::line_total).fold(Decimal::ZERO, |total, line| {
            total.checked_add(line).unwrap_or(Decimal::MAX)
        })
    }

    pub(crate) fn get_mut(&mut self, product_id: ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|entry| entry.product.id == product_id)
    }

    pub(crate) fn insert(&mut self, product: Product) {
        self.entries.push(CartEntry { product, quantity: 1 });
    }

    /// Returns whether an entry was removed.
    pub(crate) fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.product.id != product_id);
        before != self.entries.len()
    }

    /// Drops zero-quantity entries and duplicate ids. Returns how many entries were dropped.
    pub(crate) fn normalize(&mut self) -> usize {
        let before = self.entries.len();
        let mut seen = std::collections::HashSet::new();
        self.entries.retain(|entry| entry.quantity > 0 && seen.insert(entry.product.id));
        before - self.entries.len()
    }
}
