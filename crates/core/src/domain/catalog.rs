use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductId};

/// Products in first-fetch order.
///
/// Appending does not check for duplicates: the pagination merge step is the
/// only caller and it consults [`CatalogState::find_by_id`] first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogState {
    products: Vec<Product>,
}

impl CatalogState {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn find_by_id(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find_by_id(product_id).is_some()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Keeps the first occurrence of every id. Returns how many duplicates were dropped.
    pub(crate) fn dedup_by_id(&mut self) -> usize {
        let before = self.products.len();
        let mut seen = std::collections::HashSet::new();
        self.products.retain(|product| seen.insert(product.id));
        before - self.products.len()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::domain::product::{Product, ProductId, Rating};

    use super::CatalogState;

    fn product(id: u64, title: &str) -> Product {
        Product {
            id: ProductId(id),
            title: title.to_string(),
            price: Decimal::new(1000, 2),
            description: String::new(),
            category: "misc".to_string(),
            image: String::new(),
            rating: Rating { rate: Decimal::new(40, 1), count: 1 },
        }
    }

    #[test]
    fn find_by_id_returns_first_fetched_record() {
        let mut catalog = CatalogState::default();
        catalog.add_product(product(1, "first"));
        catalog.add_product(product(2, "second"));

        assert_eq!(catalog.find_by_id(ProductId(2)).map(|p| p.title.as_str()), Some("second"));
        assert!(catalog.find_by_id(ProductId(3)).is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn dedup_keeps_insertion_order_and_first_occurrence() {
        let mut catalog = CatalogState::new(vec![
            product(3, "three"),
            product(1, "one"),
            product(3, "three again"),
        ]);

        assert_eq!(catalog.dedup_by_id(), 1);
        let titles: Vec<_> = catalog.products().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["three", "one"]);
    }
}
