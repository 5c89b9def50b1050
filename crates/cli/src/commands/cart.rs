use clap::Subcommand;
use shopfront_core::errors::{ApplicationError, DomainError};
use shopfront_core::store::{ActionOutcome, IgnoreReason};
use shopfront_core::views;
use shopfront_core::ProductId;

use crate::commands::session::{application_failure, with_storefront};
use crate::commands::CommandResult;

#[derive(Debug, Clone, Subcommand)]
pub enum CartCommand {
    #[command(about = "Show cart entries and the total")]
    Show,
    #[command(about = "Add one unit of a catalog product")]
    Add { product_id: String },
    #[command(about = "Remove a product from the cart")]
    Remove { product_id: String },
    #[command(about = "Set an absolute quantity (0 removes)")]
    Set { product_id: String, quantity: String },
    #[command(about = "Increase quantity by one, adding the product if absent")]
    Inc { product_id: String },
    #[command(about = "Decrease quantity by one, removing the product at one")]
    Dec { product_id: String },
}

enum Mutation {
    Add(ProductId),
    Remove(ProductId),
    Set(ProductId, u32),
    Inc(ProductId),
    Dec(ProductId),
}

pub fn run(command: CartCommand) -> CommandResult {
    let mutation = match parse(command) {
        Ok(Some(mutation)) => mutation,
        Ok(None) => return show(),
        Err(error) => return application_failure("cart", error),
    };

    with_storefront("cart", |storefront| async move {
        let result = match mutation {
            Mutation::Add(id) => storefront.add_to_cart(id).await,
            Mutation::Remove(id) => storefront.remove_from_cart(id).await,
            Mutation::Set(id, quantity) => storefront.update_quantity(id, quantity).await,
            Mutation::Inc(id) => storefront.increment(id).await,
            Mutation::Dec(id) => storefront.decrement(id).await,
        };

        match result {
            Ok(outcome) => CommandResult::success_with_data(
                "cart",
                outcome_message(outcome),
                views::cart_view(&storefront.cart()),
            ),
            Err(error) => application_failure("cart", error),
        }
    })
}

fn show() -> CommandResult {
    with_storefront("cart", |storefront| async move {
        let cart = views::cart_view(&storefront.cart());
        let message = if cart.is_empty {
            "Your cart is empty".to_string()
        } else {
            format!("Total: ${}", cart.total)
        };
        CommandResult::success_with_data("cart", message, cart)
    })
}

fn parse(command: CartCommand) -> Result<Option<Mutation>, ApplicationError> {
    let id = |raw: &str| raw.parse::<ProductId>().map_err(ApplicationError::from);
    let mutation = match command {
        CartCommand::Show => return Ok(None),
        CartCommand::Add { product_id } => Mutation::Add(id(&product_id)?),
        CartCommand::Remove { product_id } => Mutation::Remove(id(&product_id)?),
        CartCommand::Set { product_id, quantity } => {
            let parsed = quantity
                .trim()
                .parse::<u32>()
                .map_err(|_| DomainError::InvalidQuantity(quantity.clone()))?;
            Mutation::Set(id(&product_id)?, parsed)
        }
        CartCommand::Inc { product_id } => Mutation::Inc(id(&product_id)?),
        CartCommand::Dec { product_id } => Mutation::Dec(id(&product_id)?),
    };
    Ok(Some(mutation))
}

fn outcome_message(outcome: ActionOutcome) -> &'static str {
    match outcome {
        ActionOutcome::Applied => "cart updated",
        ActionOutcome::Ignored(IgnoreReason::UnknownProduct) => {
            "no change: product is not in the catalog"
        }
        ActionOutcome::Ignored(IgnoreReason::NotInCart) => "no change: product is not in the cart",
    }
}
