pub mod config;
pub mod domain;
pub mod errors;
pub mod fetch;
pub mod notify;
pub mod pagination;
pub mod persistence;
pub mod pricing;
pub mod routes;
pub mod store;
pub mod storefront;
pub mod views;

pub use domain::cart::{CartEntry, CartState};
pub use domain::catalog::CatalogState;
pub use domain::product::{Product, ProductId, Rating};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use fetch::{CatalogFetchError, CatalogSource, PageRequest, DEFAULT_PAGE_SIZE};
pub use notify::{Notice, NoticeLevel};
pub use pagination::{
    FetchTicket, IgnoredSignal, PaginationController, PaginationPhase, PaginationStatus,
    SearchDebouncer, SignalOutcome,
};
pub use persistence::{PersistenceError, StateRepository};
pub use routes::Route;
pub use store::{reduce, ActionOutcome, IgnoreReason, PersistedState, StoreAction};
pub use storefront::{FetchReport, HydrationReport, Storefront, StorefrontSettings};
pub use views::View;
