use serde::Serialize;

use crate::domain::cart::{CartEntry, CartState};
use crate::domain::product::{Product, Rating};
use crate::pricing::{format_amount, format_price};
use crate::routes::Route;
use crate::store::PersistedState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductCardView {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub image: String,
    pub price: String,
    pub quantity: u32,
    pub in_cart: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductDetailView {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub price: String,
    pub stars: Vec<bool>,
    pub review_count: u32,
    pub quantity: u32,
    pub in_cart: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub id: u64,
    pub title: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub item_count: u64,
    pub total: String,
    pub is_empty: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    ProductList(Vec<ProductCardView>),
    Cart(CartView),
    ProductDetail(ProductDetailView),
    NotFound,
}

pub fn resolve(route: Route, state: &PersistedState) -> View {
    match route {
        Route::ProductList => View::ProductList(product_cards(state)),
        Route::Cart => View::Cart(cart_view(&state.cart)),
        Route::ProductDetail(product_id) => match state.catalog.find_by_id(product_id) {
            Some(product) => View::ProductDetail(product_detail(product, &state.cart)),
            None => View::NotFound,
        },
        Route::NotFound => View::NotFound,
    }
}

pub fn product_cards(state: &PersistedState) -> Vec<ProductCardView> {
    state
        .catalog
        .products()
        .iter()
        .map(|product| {
            let quantity = state.cart.quantity_of(product.id);
            ProductCardView {
                id: product.id.0,
                title: product.title.clone(),
                category: product.category.clone(),
                image: product.image.clone(),
                price: format_price(product.price),
                quantity,
                in_cart: quantity > 0,
            }
        })
        .collect()
}

pub fn product_detail(product: &Product, cart: &CartState) -> ProductDetailView {
    let quantity = cart.quantity_of(product.id);
    ProductDetailView {
        id: product.id.0,
        title: product.title.clone(),
        description: product.description.clone(),
        category: product.category.clone(),
        image: product.image.clone(),
        price: format_price(product.price),
        stars: star_bar(&product.rating),
        review_count: product.rating.count,
        quantity,
        in_cart: quantity > 0,
    }
}

pub fn cart_view(cart: &CartState) -> CartView {
    CartView {
        lines: cart.entries().iter().map(cart_line).collect(),
        item_count: cart.item_count(),
        total: format_amount(cart.total_amount()),
        is_empty: cart.is_empty(),
    }
}

fn cart_line(entry: &CartEntry) -> CartLineView {
    CartLineView {
        id: entry.product.id.0,
        title: entry.product.title.clone(),
        price: format_price(entry.product.price),
        quantity: entry.quantity,
        line_total: format_amount(entry.line_total()),
    }
}

fn star_bar(rating: &Rating) -> Vec<bool> {
    let filled = rating.filled_stars();
    (0..Rating::MAX_STARS).map(|index| index < filled).collect()
}
