pub mod state;

use serde::{Deserialize, Serialize};

use crate::domain::product::{Product, ProductId};

pub use state::{NormalizeReport, PersistedState};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreAction {
    AddProduct(Product),
    AddToCart(ProductId),
    RemoveFromCart(ProductId),
    SetQuantity { product_id: ProductId, quantity: u32 },
}

impl StoreAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddProduct(_) => "add_product",
            Self::AddToCart(_) => "add_to_cart",
            Self::RemoveFromCart(_) => "remove_from_cart",
            Self::SetQuantity { .. } => "set_quantity",
        }
    }

    pub fn product_id(&self) -> ProductId {
        match self {
            Self::AddProduct(product) => product.id,
            Self::AddToCart(product_id)
            | Self::RemoveFromCart(product_id)
            | Self::SetQuantity { product_id, .. } => *product_id,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The product is not in the catalog, so no cart entry can be created.
    UnknownProduct,
    /// Removal or quantity update for a product that has no cart entry.
    NotInCart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Applied,
    Ignored(IgnoreReason),
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction {
    pub state: PersistedState,
    pub outcome: ActionOutcome,
}

/// Applies one action to the state and returns the next state.
///
/// Ignored actions return the input state unchanged. Quantity updates set an
/// absolute value, and a quantity of zero removes the entry.
pub fn reduce(mut state: PersistedState, action: StoreAction) -> Reduction {
    use ActionOutcome::{Applied, Ignored};
    use IgnoreReason::{NotInCart, UnknownProduct};

    let outcome = match action {
        StoreAction::AddProduct(product) => {
            state.catalog.add_product(product);
            Applied
        }
        StoreAction::AddToCart(product_id) => {
            if let Some(entry) = state.cart.get_mut(product_id) {
                entry.quantity = entry.quantity.saturating_add(1);
                Applied
            } else if let Some(product) = state.catalog.find_by_id(product_id).cloned() {
                state.cart.insert(product);
                Applied
            } else {
                Ignored(UnknownProduct)
            }
        }
        StoreAction::RemoveFromCart(product_id) => {
            if state.cart.remove(product_id) {
                Applied
            } else {
                Ignored(NotInCart)
            }
        }
        StoreAction::SetQuantity { product_id, quantity: 0 } => {
            if state.cart.remove(product_id) {
                Applied
            } else {
                Ignored(NotInCart)
            }
        }
        StoreAction::SetQuantity { product_id, quantity } => match state.cart.get_mut(product_id) {
            Some(entry) => {
                entry.quantity = quantity;
                Applied
            }
            None => Ignored(NotInCart),
        },
    };

    Reduction { state, outcome }
}
