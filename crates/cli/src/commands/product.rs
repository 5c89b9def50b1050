use shopfront_core::errors::ApplicationError;
use shopfront_core::routes::Route;
use shopfront_core::views::View;
use shopfront_core::ProductId;

use crate::commands::session::{application_failure, with_storefront, EXIT_NOT_FOUND};
use crate::commands::CommandResult;

/// Shows one product from the stored catalog. Never fetches.
pub fn run(raw_id: &str) -> CommandResult {
    let product_id = match raw_id.parse::<ProductId>() {
        Ok(product_id) => product_id,
        Err(error) => return application_failure("product", ApplicationError::from(error)),
    };

    with_storefront("product", |storefront| async move {
        match storefront.view(Route::ProductDetail(product_id)) {
            View::ProductDetail(detail) => {
                let message = format!("{} ({})", detail.title, detail.price);
                CommandResult::success_with_data("product", message, detail)
            }
            _ => CommandResult::failure(
                "product",
                "not_found",
                "Product Not Found",
                EXIT_NOT_FOUND,
            ),
        }
    })
}
