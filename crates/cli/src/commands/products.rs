use serde::Serialize;
use shopfront_core::storefront::FetchReport;
use shopfront_core::views::{self, ProductCardView};

use crate::commands::session::{with_storefront, EXIT_CATALOG, EXIT_INVALID_INPUT};
use crate::commands::CommandResult;

#[derive(Debug, Serialize)]
struct ProductListing {
    search: String,
    page: u32,
    products: Vec<ProductCardView>,
    fetches: Vec<FetchReport>,
}

/// Fetches `pages` pages (mount plus `pages - 1` near-end signals), optionally
/// under a search term, and prints the merged catalog.
pub fn run(search: Option<String>, pages: u32) -> CommandResult {
    if pages == 0 {
        return CommandResult::failure(
            "products",
            "invalid_input",
            "--pages must be at least 1",
            EXIT_INVALID_INPUT,
        );
    }

    with_storefront("products", |storefront| async move {
        let mut fetches = storefront.mount_list().await;
        if let Some(term) = search.as_deref().map(str::trim).filter(|term| !term.is_empty()) {
            fetches.extend(storefront.change_search(term).await);
        }
        for _ in 1..pages {
            fetches.extend(storefront.near_end().await);
        }

        let failures: Vec<&str> = fetches
            .iter()
            .filter_map(|report| match report {
                FetchReport::Failed { error, .. } => Some(error.as_str()),
                _ => None,
            })
            .collect();
        let dispatched = fetches
            .iter()
            .filter(|report| !matches!(report, FetchReport::Skipped { .. }))
            .count();
        if dispatched > 0 && failures.len() == dispatched {
            return CommandResult::failure(
                "products",
                "catalog_fetch",
                failures.join("; "),
                EXIT_CATALOG,
            );
        }

        let status = storefront.pagination_status();
        let products = views::product_cards(&storefront.snapshot());
        let message = format!("{} products in catalog", products.len());
        CommandResult::success_with_data(
            "products",
            message,
            ProductListing { search: status.search, page: status.page, products, fetches },
        )
    })
}
