use async_trait::async_trait;
use thiserror::Error;

use crate::domain::product::Product;

/// Products per page step. Page `n` requests the first `n * DEFAULT_PAGE_SIZE` results.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based.
    pub page: u32,
    /// Empty string means no search filter.
    pub search: String,
}

impl PageRequest {
    pub fn new(page: u32, search: impl Into<String>) -> Self {
        Self { page: page.max(1), search: search.into() }
    }

    /// The catalog API is paged as a growing prefix: `limit = page * page_size`.
    pub fn limit(&self, page_size: u32) -> u32 {
        self.page.saturating_mul(page_size)
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogFetchError {
    #[error("catalog request failed: {0}")]
    Transport(String),
    #[error("catalog responded with status {status} for `{url}`")]
    Status { status: u16, url: String },
    #[error("catalog response could not be decoded: {0}")]
    Decode(String),
}

/// Remote product catalog. One call per page; no retry.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Product>, CatalogFetchError>;
}

#[cfg(test)]
mod tests {
    use super::{PageRequest, DEFAULT_PAGE_SIZE};

    #[test]
    fn limit_grows_with_page_number() {
        assert_eq!(PageRequest::new(1, "").limit(DEFAULT_PAGE_SIZE), 5);
        assert_eq!(PageRequest::new(3, "").limit(DEFAULT_PAGE_SIZE), 15);
    }

    #[test]
    fn page_zero_is_clamped_to_first_page() {
        assert_eq!(PageRequest::new(0, "shoes").page, 1);
    }
}
