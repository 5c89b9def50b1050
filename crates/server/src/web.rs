//! Storefront routes.
//!
//! HTML:
//! - `GET  /`                       product list (mounts the list, optional `?search=`)
//! - `GET  /cart`                   cart with totals
//! - `GET  /product/{id}`           product detail, 404 view for unknown ids
//!
//! Form posts (redirect to `next`):
//! - `POST /cart/{id}/add|remove|increment|decrement`
//! - `POST /cart/{id}/quantity`     absolute quantity, 0 removes
//!
//! JSON:
//! - `POST /more`                   near-end-of-list signal
//! - `GET  /api/search?q=`          debounced search input
//! - `GET  /api/state`              pagination and cart summary
//! - `POST /checkout`               checkout notice

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use shopfront_core::errors::{ApplicationError, DomainError, InterfaceError};
use shopfront_core::notify::Notice;
use shopfront_core::pagination::{PaginationPhase, PaginationStatus};
use shopfront_core::routes::Route;
use shopfront_core::storefront::{FetchReport, Storefront};
use shopfront_core::views::{self, CartView, View};
use shopfront_core::ProductId;
use tera::{Context, Tera};
use tracing::{error, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct ShopState {
    storefront: Arc<Storefront>,
    templates: Arc<Tera>,
}

pub fn init_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../../templates/storefront/base.html")),
        ("loading.html", include_str!("../../../templates/storefront/loading.html")),
        ("product_list.html", include_str!("../../../templates/storefront/product_list.html")),
        ("product_detail.html", include_str!("../../../templates/storefront/product_detail.html")),
        ("cart.html", include_str!("../../../templates/storefront/cart.html")),
        ("not_found.html", include_str!("../../../templates/storefront/not_found.html")),
        ("error.html", include_str!("../../../templates/storefront/error.html")),
    ])?;
    Ok(tera)
}

pub fn router(storefront: Arc<Storefront>, templates: Arc<Tera>) -> Router {
    Router::new()
        .route("/", get(product_list_page))
        .route("/cart", get(cart_page))
        .route("/product/{id}", get(product_page))
        .route("/cart/{id}/add", post(add_to_cart))
        .route("/cart/{id}/remove", post(remove_from_cart))
        .route("/cart/{id}/increment", post(increment))
        .route("/cart/{id}/decrement", post(decrement))
        .route("/cart/{id}/quantity", post(set_quantity))
        .route("/more", post(load_more))
        .route("/api/search", get(search))
        .route("/api/state", get(state_summary))
        .route("/checkout", post(checkout))
        .fallback(not_found_page)
        .with_state(ShopState { storefront, templates })
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CartForm {
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub quantity: String,
    pub next: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoadMoreResponse {
    pub added: usize,
    pub reports: Vec<FetchReport>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub superseded: bool,
    pub reports: Vec<FetchReport>,
}

#[derive(Debug, Serialize)]
pub struct StateSummary {
    pub rehydrated: bool,
    pub pagination: PaginationStatus,
    pub catalog_size: usize,
    pub cart: CartView,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub correlation_id: String,
    pub notice: Notice,
}

/// JSON error carrying a user-safe message and the correlation id from logs.
pub struct ShopError(InterfaceError);

impl From<ApplicationError> for ShopError {
    fn from(error: ApplicationError) -> Self {
        let correlation_id = Uuid::new_v4().to_string();
        warn!(
            event_name = "server.request.failed",
            correlation_id = %correlation_id,
            error = %error,
            "storefront request failed"
        );
        Self(error.into_interface(correlation_id))
    }
}

impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            InterfaceError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = self.0.user_message();
        let body = ErrorBody {
            error: message.to_string(),
            correlation_id: self.0.correlation_id().to_string(),
            notice: Notice::error(message),
        };
        (status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// HTML Handlers
// ---------------------------------------------------------------------------

async fn product_list_page(
    State(state): State<ShopState>,
    Query(query): Query<ListQuery>,
) -> Response {
    if !state.storefront.is_rehydrated() {
        return loading_page(&state);
    }

    // Reloads while the list is already showing keep their page and search.
    if !state.storefront.pagination_status().observing {
        state.storefront.mount_list().await;
    }
    if let Some(term) = query.search.as_deref().map(str::trim) {
        state.storefront.change_search(term).await;
    }

    let View::ProductList(products) = state.storefront.view(Route::ProductList) else {
        return not_found(&state);
    };
    let status = state.storefront.pagination_status();
    let mut context = base_context(&state.storefront);
    context.insert("products", &products);
    context.insert("search", &status.search);
    context.insert("loading", &(status.phase == PaginationPhase::Loading));
    render(&state, "product_list.html", &context, StatusCode::OK)
}

async fn cart_page(State(state): State<ShopState>) -> Response {
    state.storefront.unmount_list();
    if !state.storefront.is_rehydrated() {
        return loading_page(&state);
    }

    let mut context = base_context(&state.storefront);
    context.insert("cart", &views::cart_view(&state.storefront.cart()));
    render(&state, "cart.html", &context, StatusCode::OK)
}

async fn product_page(State(state): State<ShopState>, Path(raw_id): Path<String>) -> Response {
    state.storefront.unmount_list();
    if !state.storefront.is_rehydrated() {
        return loading_page(&state);
    }

    match state.storefront.view(Route::product_detail(&raw_id)) {
        View::ProductDetail(product) => {
            let mut context = base_context(&state.storefront);
            context.insert("product", &product);
            render(&state, "product_detail.html", &context, StatusCode::OK)
        }
        _ => not_found(&state),
    }
}

async fn not_found_page(State(state): State<ShopState>) -> Response {
    not_found(&state)
}

fn not_found(state: &ShopState) -> Response {
    render(state, "not_found.html", &base_context(&state.storefront), StatusCode::NOT_FOUND)
}

fn loading_page(state: &ShopState) -> Response {
    render(state, "loading.html", &Context::new(), StatusCode::OK)
}

fn base_context(storefront: &Storefront) -> Context {
    let mut context = Context::new();
    context.insert("cart_count", &storefront.cart().item_count());
    context
}

fn render(state: &ShopState, template: &str, context: &Context, status: StatusCode) -> Response {
    match state.templates.render(template, context) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(error) => {
            error!(
                event_name = "server.render.failed",
                correlation_id = "render",
                template,
                error = %error,
                "failed to render template"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, Html("<h1>Internal error</h1>".to_string()))
                .into_response()
        }
    }
}

// ---------------------------------------------------------------------------
// Cart form posts
// ---------------------------------------------------------------------------

async fn add_to_cart(
    State(state): State<ShopState>,
    Path(raw_id): Path<String>,
    Form(form): Form<CartForm>,
) -> Result<Redirect, ShopError> {
    let product_id = parse_product_id(&raw_id)?;
    state.storefront.add_to_cart(product_id).await?;
    Ok(Redirect::to(safe_next(form.next.as_deref())))
}

async fn remove_from_cart(
    State(state): State<ShopState>,
    Path(raw_id): Path<String>,
    Form(form): Form<CartForm>,
) -> Result<Redirect, ShopError> {
    let product_id = parse_product_id(&raw_id)?;
    state.storefront.remove_from_cart(product_id).await?;
    Ok(Redirect::to(safe_next(form.next.as_deref())))
}

async fn increment(
    State(state): State<ShopState>,
    Path(raw_id): Path<String>,
    Form(form): Form<CartForm>,
) -> Result<Redirect, ShopError> {
    let product_id = parse_product_id(&raw_id)?;
    state.storefront.increment(product_id).await?;
    Ok(Redirect::to(safe_next(form.next.as_deref())))
}

async fn decrement(
    State(state): State<ShopState>,
    Path(raw_id): Path<String>,
    Form(form): Form<CartForm>,
) -> Result<Redirect, ShopError> {
    let product_id = parse_product_id(&raw_id)?;
    state.storefront.decrement(product_id).await?;
    Ok(Redirect::to(safe_next(form.next.as_deref())))
}

async fn set_quantity(
    State(state): State<ShopState>,
    Path(raw_id): Path<String>,
    Form(form): Form<QuantityForm>,
) -> Result<Redirect, ShopError> {
    let product_id = parse_product_id(&raw_id)?;
    let quantity = form
        .quantity
        .trim()
        .parse::<u32>()
        .map_err(|_| ApplicationError::from(DomainError::InvalidQuantity(form.quantity.clone())))?;
    state.storefront.update_quantity(product_id, quantity).await?;
    Ok(Redirect::to(safe_next(form.next.as_deref())))
}

fn parse_product_id(raw: &str) -> Result<ProductId, ApplicationError> {
    raw.parse::<ProductId>().map_err(ApplicationError::from)
}

/// Only same-origin absolute paths are followed; anything else goes to the cart.
fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => "/cart",
    }
}

// ---------------------------------------------------------------------------
// JSON Handlers
// ---------------------------------------------------------------------------

async fn load_more(State(state): State<ShopState>) -> Json<LoadMoreResponse> {
    let reports = state.storefront.near_end().await;
    Json(LoadMoreResponse { added: added_products(&reports), reports })
}

async fn search(
    State(state): State<ShopState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let term = query.q.as_deref().map(str::trim).unwrap_or_default().to_string();
    match state.storefront.debounced_search(term).await {
        Some(reports) => Json(SearchResponse { superseded: false, reports }),
        None => Json(SearchResponse { superseded: true, reports: Vec::new() }),
    }
}

async fn state_summary(State(state): State<ShopState>) -> Json<StateSummary> {
    let snapshot = state.storefront.snapshot();
    Json(StateSummary {
        rehydrated: state.storefront.is_rehydrated(),
        pagination: state.storefront.pagination_status(),
        catalog_size: snapshot.catalog.len(),
        cart: views::cart_view(&snapshot.cart),
    })
}

async fn checkout(State(state): State<ShopState>) -> Json<Notice> {
    Json(state.storefront.checkout())
}

fn added_products(reports: &[FetchReport]) -> usize {
    reports
        .iter()
        .map(|report| match report {
            FetchReport::Completed { added, .. } => *added,
            _ => 0,
        })
        .sum()
}
