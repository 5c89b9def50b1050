//! Single owning context for the storefront state.
//!
//! Cart mutations and page merges go through the reducer and are then
//! committed: the whole [`PersistedState`] is handed to the
//! [`StateRepository`] before the call returns. Catalog fetches run outside
//! the state lock; the pagination controller guarantees at most one is in
//! flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::domain::cart::CartState;
use crate::domain::product::{Product, ProductId};
use crate::errors::ApplicationError;
use crate::fetch::CatalogSource;
use crate::notify::Notice;
use crate::pagination::{
    merge_page, FetchTicket, IgnoredSignal, PaginationController, PaginationStatus,
    SearchDebouncer, SignalOutcome, DEFAULT_SEARCH_DEBOUNCE,
};
use crate::persistence::StateRepository;
use crate::routes::Route;
use crate::store::{reduce, ActionOutcome, NormalizeReport, PersistedState, StoreAction};
use crate::views::{self, View};

#[derive(Clone, Debug)]
pub struct StorefrontSettings {
    pub search_debounce: Duration,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self { search_debounce: DEFAULT_SEARCH_DEBOUNCE }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HydrationReport {
    Restored { products: usize, cart_entries: usize, repaired_entries: usize },
    Empty,
    Fallback { reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchReport {
    Skipped { reason: IgnoredSignal },
    Completed {
        correlation_id: String,
        page: u32,
        search: String,
        added: usize,
        skipped: usize,
        persisted: bool,
    },
    Failed { correlation_id: String, page: u32, search: String, error: String },
}

struct Session {
    state: PersistedState,
    pagination: PaginationController,
}

pub struct Storefront {
    source: Arc<dyn CatalogSource>,
    repository: Arc<dyn StateRepository>,
    session: Mutex<Session>,
    debouncer: Mutex<SearchDebouncer>,
    persist_gate: tokio::sync::Mutex<()>,
    rehydrated: AtomicBool,
}

impl Storefront {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        repository: Arc<dyn StateRepository>,
        settings: StorefrontSettings,
    ) -> Self {
        Self {
            source,
            repository,
            session: Mutex::new(Session {
                state: PersistedState::default(),
                pagination: PaginationController::default(),
            }),
            debouncer: Mutex::new(SearchDebouncer::new(settings.search_debounce)),
            persist_gate: tokio::sync::Mutex::new(()),
            rehydrated: AtomicBool::new(false),
        }
    }

    /// Restores persisted state. Missing or unreadable data falls back to an
    /// empty catalog and cart; this never fails.
    pub async fn hydrate(&self) -> HydrationReport {
        let report = match self.repository.load().await {
            Ok(Some(mut state)) => {
                let repaired = state.normalize();
                log_repairs(&repaired);
                let report = HydrationReport::Restored {
                    products: state.catalog.len(),
                    cart_entries: state.cart.len(),
                    repaired_entries: repaired.duplicate_products + repaired.dropped_cart_entries,
                };
                self.session().state = state;
                report
            }
            Ok(None) => {
                self.session().state = PersistedState::default();
                HydrationReport::Empty
            }
            Err(error) => {
                warn!(
                    event_name = "store.hydrate.fallback",
                    correlation_id = "hydrate",
                    error = %error,
                    "persisted state unavailable, starting empty"
                );
                self.session().state = PersistedState::default();
                HydrationReport::Fallback { reason: error.to_string() }
            }
        };

        self.rehydrated.store(true, Ordering::SeqCst);
        info!(
            event_name = "store.hydrate.completed",
            correlation_id = "hydrate",
            report = ?report,
            "storefront state rehydrated"
        );
        report
    }

    pub fn is_rehydrated(&self) -> bool {
        self.rehydrated.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> PersistedState {
        self.session().state.clone()
    }

    pub fn product(&self, product_id: ProductId) -> Option<Product> {
        self.session().state.catalog.find_by_id(product_id).cloned()
    }

    pub fn cart(&self) -> CartState {
        self.session().state.cart.clone()
    }

    pub fn total_amount(&self) -> Decimal {
        self.session().state.cart.total_amount()
    }

    pub fn view(&self, route: Route) -> View {
        views::resolve(route, &self.session().state)
    }

    pub fn pagination_status(&self) -> PaginationStatus {
        self.session().pagination.status()
    }

    pub fn checkout(&self) -> Notice {
        info!(
            event_name = "store.checkout.requested",
            correlation_id = "checkout",
            cart_entries = self.session().state.cart.len(),
            "checkout is not available yet"
        );
        Notice::checkout_coming_soon()
    }

    /// Applies one action and commits the result.
    ///
    /// Ignored actions leave state untouched and skip the save.
    pub async fn dispatch(&self, action: StoreAction) -> Result<ActionOutcome, ApplicationError> {
        let outcome = self.apply(action);
        if outcome.is_applied() {
            self.commit("dispatch").await?;
        }
        Ok(outcome)
    }

    pub async fn add_to_cart(&self, product_id: ProductId) -> Result<ActionOutcome, ApplicationError> {
        self.dispatch(StoreAction::AddToCart(product_id)).await
    }

    pub async fn remove_from_cart(
        &self,
        product_id: ProductId,
    ) -> Result<ActionOutcome, ApplicationError> {
        self.dispatch(StoreAction::RemoveFromCart(product_id)).await
    }

    pub async fn update_quantity(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<ActionOutcome, ApplicationError> {
        self.dispatch(StoreAction::SetQuantity { product_id, quantity }).await
    }

    /// "+" control: bump an existing entry, otherwise add the product.
    pub async fn increment(&self, product_id: ProductId) -> Result<ActionOutcome, ApplicationError> {
        let quantity = self.session().state.cart.quantity_of(product_id);
        let action = if quantity == 0 {
            StoreAction::AddToCart(product_id)
        } else {
            StoreAction::SetQuantity { product_id, quantity: quantity.saturating_add(1) }
        };
        self.dispatch(action).await
    }

    /// "-" control: a quantity of one removes the entry.
    pub async fn decrement(&self, product_id: ProductId) -> Result<ActionOutcome, ApplicationError> {
        let quantity = self.session().state.cart.quantity_of(product_id);
        let action = match quantity {
            0 | 1 => StoreAction::RemoveFromCart(product_id),
            _ => StoreAction::SetQuantity { product_id, quantity: quantity - 1 },
        };
        self.dispatch(action).await
    }

    pub async fn mount_list(&self) -> Vec<FetchReport> {
        let outcome = self.session().pagination.mount();
        self.follow_signal(outcome).await
    }

    pub fn unmount_list(&self) {
        self.session().pagination.unmount();
    }

    pub async fn near_end(&self) -> Vec<FetchReport> {
        let outcome = self.session().pagination.near_end();
        self.follow_signal(outcome).await
    }

    pub async fn change_search(&self, term: impl Into<String>) -> Vec<FetchReport> {
        let outcome = self.session().pagination.change_search(term);
        self.follow_signal(outcome).await
    }

    /// Waits out the quiet period and only searches if no newer input arrived.
    /// Returns `None` when superseded.
    pub async fn debounced_search(&self, term: impl Into<String>) -> Option<Vec<FetchReport>> {
        let (generation, quiet_period) = {
            let mut debouncer = self.debouncer();
            (debouncer.input(term), debouncer.quiet_period())
        };

        tokio::time::sleep(quiet_period).await;

        let settled = self.debouncer().settle(generation)?;
        Some(self.change_search(settled).await)
    }

    async fn follow_signal(&self, outcome: SignalOutcome) -> Vec<FetchReport> {
        match outcome {
            SignalOutcome::Dispatch(ticket) => self.run_fetches(ticket).await,
            SignalOutcome::Ignored(reason) => {
                debug!(
                    event_name = "catalog.fetch.skipped",
                    correlation_id = "pagination",
                    reason = ?reason,
                    "pagination signal ignored"
                );
                vec![FetchReport::Skipped { reason }]
            }
        }
    }

    async fn run_fetches(&self, first: FetchTicket) -> Vec<FetchReport> {
        let mut reports = Vec::new();
        let mut next = Some(first);

        while let Some(ticket) = next.take() {
            info!(
                event_name = "catalog.fetch.started",
                correlation_id = %ticket.correlation_id,
                trigger = ?ticket.trigger,
                page = ticket.request.page,
                search = %ticket.request.search,
                "fetching catalog page"
            );

            let mut guard = InFlight { storefront: self, ticket: Some(ticket.clone()) };
            let result = self.source.fetch_page(&ticket.request).await;
            guard.ticket = None;

            match result {
                Ok(products) => {
                    let (follow_up, summary) = {
                        let mut session = self.session();
                        let state = std::mem::take(&mut session.state);
                        let (state, summary) = merge_page(state, products);
                        session.state = state;
                        (session.pagination.complete(&ticket, true), summary)
                    };

                    let persisted = summary.added == 0
                        || self.commit(&ticket.correlation_id).await.is_ok();
                    info!(
                        event_name = "catalog.fetch.completed",
                        correlation_id = %ticket.correlation_id,
                        page = ticket.request.page,
                        added = summary.added,
                        skipped = summary.skipped,
                        persisted,
                        "catalog page merged"
                    );
                    reports.push(FetchReport::Completed {
                        correlation_id: ticket.correlation_id.clone(),
                        page: ticket.request.page,
                        search: ticket.request.search.clone(),
                        added: summary.added,
                        skipped: summary.skipped,
                        persisted,
                    });
                    next = follow_up;
                }
                Err(error) => {
                    warn!(
                        event_name = "catalog.fetch.failed",
                        correlation_id = %ticket.correlation_id,
                        page = ticket.request.page,
                        error = %error,
                        "catalog fetch failed, no products added"
                    );
                    next = self.session().pagination.complete(&ticket, false);
                    reports.push(FetchReport::Failed {
                        correlation_id: ticket.correlation_id.clone(),
                        page: ticket.request.page,
                        search: ticket.request.search.clone(),
                        error: error.to_string(),
                    });
                }
            }
        }

        reports
    }

    fn apply(&self, action: StoreAction) -> ActionOutcome {
        let action_name = action.name();
        let product_id = action.product_id();
        let mut session = self.session();
        let state = std::mem::take(&mut session.state);
        let reduction = reduce(state, action);
        session.state = reduction.state;

        match reduction.outcome {
            ActionOutcome::Applied => debug!(
                event_name = "store.action.applied",
                action = action_name,
                product_id = %product_id,
                "store action applied"
            ),
            ActionOutcome::Ignored(reason) => debug!(
                event_name = "store.action.ignored",
                action = action_name,
                product_id = %product_id,
                reason = ?reason,
                "store action ignored"
            ),
        }
        reduction.outcome
    }

    /// Saves the current state. Saves are serialized and always write the
    /// latest state, so a slow save can never overwrite a newer one.
    async fn commit(&self, correlation_id: &str) -> Result<(), ApplicationError> {
        let _gate = self.persist_gate.lock().await;
        let snapshot = self.snapshot();

        self.repository.save(&snapshot).await.map_err(|error| {
            error!(
                event_name = "store.persist.failed",
                correlation_id = %correlation_id,
                error = %error,
                "state could not be persisted"
            );
            ApplicationError::from(error)
        })
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        match self.session.lock() {
            Ok(session) => session,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn debouncer(&self) -> MutexGuard<'_, SearchDebouncer> {
        match self.debouncer.lock() {
            Ok(debouncer) => debouncer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Returns the controller to idle if a fetch future is dropped mid-flight.
struct InFlight<'a> {
    storefront: &'a Storefront,
    ticket: Option<FetchTicket>,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            self.storefront.session().pagination.abandon(&ticket);
            warn!(
                event_name = "catalog.fetch.abandoned",
                correlation_id = %ticket.correlation_id,
                "catalog fetch dropped before completion"
            );
        }
    }
}

fn log_repairs(report: &NormalizeReport) {
    if !report.is_clean() {
        warn!(
            event_name = "store.hydrate.repaired",
            correlation_id = %Uuid::new_v4(),
            duplicate_products = report.duplicate_products,
            dropped_cart_entries = report.dropped_cart_entries,
            "persisted state violated store invariants and was repaired"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use tokio::sync::Notify;

    use crate::domain::cart::{CartEntry, CartState};
    use crate::domain::catalog::CatalogState;
    use crate::domain::product::{Product, ProductId, Rating};
    use crate::fetch::{CatalogFetchError, CatalogSource, PageRequest};
    use crate::pagination::{IgnoredSignal, PaginationPhase};
    use crate::persistence::{decode_snapshot, encode_snapshot, PersistenceError, StateRepository};
    use crate::routes::Route;
    use crate::store::{ActionOutcome, IgnoreReason, PersistedState};
    use crate::views::View;

    use super::{FetchReport, HydrationReport, Storefront, StorefrontSettings};

    fn product(id: u64, price: Decimal) -> Product {
        Product {
            id: ProductId(id),
            title: format!("product-{id}"),
            price,
            description: "desc".to_string(),
            category: "electronics".to_string(),
            image: format!("https://img.example/{id}.png"),
            rating: Rating { rate: Decimal::new(31, 1), count: 12 },
        }
    }

    #[derive(Default)]
    struct ScriptedSource {
        responses: Mutex<VecDeque<Result<Vec<Product>, CatalogFetchError>>>,
        requests: Mutex<Vec<PageRequest>>,
        gate: Option<Arc<Notify>>,
    }

    impl ScriptedSource {
        fn with(responses: Vec<Result<Vec<Product>, CatalogFetchError>>) -> Self {
            Self { responses: Mutex::new(responses.into()), ..Self::default() }
        }

        fn requests(&self) -> Vec<PageRequest> {
            self.requests.lock().expect("requests lock").clone()
        }
    }

    #[async_trait]
    impl CatalogSource for ScriptedSource {
        async fn fetch_page(
            &self,
            request: &PageRequest,
        ) -> Result<Vec<Product>, CatalogFetchError> {
            self.requests.lock().expect("requests lock").push(request.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.responses.lock().expect("responses lock").pop_front().unwrap_or(Ok(Vec::new()))
        }
    }

    #[derive(Default)]
    struct BlobRepository {
        blob: Mutex<Option<String>>,
        saves: Mutex<usize>,
        fail_saves: bool,
    }

    impl BlobRepository {
        fn seeded(raw: &str) -> Self {
            Self { blob: Mutex::new(Some(raw.to_string())), ..Self::default() }
        }

        fn saves(&self) -> usize {
            *self.saves.lock().expect("saves lock")
        }

        fn stored(&self) -> Option<PersistedState> {
            let blob = self.blob.lock().expect("blob lock").clone()?;
            decode_snapshot(&blob).ok()
        }
    }

    #[async_trait]
    impl StateRepository for BlobRepository {
        async fn load(&self) -> Result<Option<PersistedState>, PersistenceError> {
            let blob = self.blob.lock().expect("blob lock").clone();
            blob.map(|raw| decode_snapshot(&raw)).transpose()
        }

        async fn save(&self, state: &PersistedState) -> Result<(), PersistenceError> {
            if self.fail_saves {
                return Err(PersistenceError::Storage("disk full".to_string()));
            }
            *self.blob.lock().expect("blob lock") = Some(encode_snapshot(state)?);
            *self.saves.lock().expect("saves lock") += 1;
            Ok(())
        }
    }

    fn storefront(source: Arc<ScriptedSource>, repository: Arc<BlobRepository>) -> Storefront {
        Storefront::new(source, repository, StorefrontSettings::default())
    }

    #[tokio::test]
    async fn corrupt_storage_falls_back_to_empty_state() {
        let repository = Arc::new(BlobRepository::seeded("{definitely not json"));
        let store = storefront(Arc::new(ScriptedSource::default()), repository);

        assert!(!store.is_rehydrated());
        let report = store.hydrate().await;

        assert!(matches!(report, HydrationReport::Fallback { .. }));
        assert!(store.is_rehydrated());
        assert_eq!(store.snapshot(), PersistedState::default());
    }

    #[tokio::test]
    async fn hydrate_repairs_invalid_cart_entries() {
        let item = product(1, Decimal::ONE);
        let dirty = PersistedState {
            catalog: CatalogState::new(vec![item.clone(), item.clone()]),
            cart: CartState::new(vec![CartEntry { product: item, quantity: 0 }]),
        };
        let raw = encode_snapshot(&dirty).expect("encode");
        let store =
            storefront(Arc::new(ScriptedSource::default()), Arc::new(BlobRepository::seeded(&raw)));

        let report = store.hydrate().await;

        assert_eq!(
            report,
            HydrationReport::Restored { products: 1, cart_entries: 0, repaired_entries: 2 }
        );
    }

    #[tokio::test]
    async fn cart_mutations_are_committed_before_returning() {
        let source = Arc::new(ScriptedSource::with(vec![Ok(vec![product(42, Decimal::new(
            1000, 2,
        ))])]));
        let repository = Arc::new(BlobRepository::default());
        let store = storefront(source, repository.clone());
        store.hydrate().await;
        store.mount_list().await;

        store.add_to_cart(ProductId(42)).await.expect("add");
        store.add_to_cart(ProductId(42)).await.expect("add again");
        let persisted = repository.stored().expect("state saved");
        assert_eq!(persisted.cart.quantity_of(ProductId(42)), 2);
        assert_eq!(store.total_amount(), Decimal::new(2000, 2));

        store.update_quantity(ProductId(42), 0).await.expect("zero quantity");
        assert!(repository.stored().expect("state saved").cart.is_empty());
        assert_eq!(store.total_amount(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn ignored_actions_do_not_save() {
        let repository = Arc::new(BlobRepository::default());
        let store = storefront(Arc::new(ScriptedSource::default()), repository.clone());

        let outcome = store.add_to_cart(ProductId(404)).await.expect("dispatch");

        assert_eq!(outcome, ActionOutcome::Ignored(IgnoreReason::UnknownProduct));
        assert_eq!(repository.saves(), 0);
    }

    #[tokio::test]
    async fn persistence_failures_surface_but_keep_memory_state() {
        let source = Arc::new(ScriptedSource::with(vec![Ok(vec![product(1, Decimal::ONE)])]));
        let repository = Arc::new(BlobRepository { fail_saves: true, ..BlobRepository::default() });
        let store = storefront(source, repository);

        let reports = store.mount_list().await;
        assert!(matches!(reports[0], FetchReport::Completed { persisted: false, .. }));

        let error = store.add_to_cart(ProductId(1)).await.expect_err("save should fail");
        assert!(error.to_string().contains("disk full"));
        assert_eq!(store.cart().quantity_of(ProductId(1)), 1);
    }

    #[tokio::test]
    async fn increment_and_decrement_follow_view_rules() {
        let source = Arc::new(ScriptedSource::with(vec![Ok(vec![product(3, Decimal::ONE)])]));
        let store = storefront(source, Arc::new(BlobRepository::default()));
        store.mount_list().await;

        store.increment(ProductId(3)).await.expect("inc from zero adds");
        store.increment(ProductId(3)).await.expect("inc");
        assert_eq!(store.cart().quantity_of(ProductId(3)), 2);

        store.decrement(ProductId(3)).await.expect("dec");
        assert_eq!(store.cart().quantity_of(ProductId(3)), 1);

        store.decrement(ProductId(3)).await.expect("dec removes");
        assert!(store.cart().is_empty());

        let outcome = store.decrement(ProductId(3)).await.expect("dec on absent");
        assert_eq!(outcome, ActionOutcome::Ignored(IgnoreReason::NotInCart));
    }

    #[tokio::test]
    async fn pages_are_merged_without_duplicates() {
        let source = Arc::new(ScriptedSource::with(vec![
            Ok((1..=5).map(|id| product(id, Decimal::ONE)).collect()),
            Ok((1..=10).map(|id| product(id, Decimal::ONE)).collect()),
        ]));
        let store = storefront(source.clone(), Arc::new(BlobRepository::default()));

        store.mount_list().await;
        let reports = store.near_end().await;

        assert!(matches!(reports[0], FetchReport::Completed { added: 5, skipped: 5, .. }));
        assert_eq!(store.snapshot().catalog.len(), 10);
        let pages: Vec<u32> = source.requests().iter().map(|request| request.page).collect();
        assert_eq!(pages, vec![1, 2]);
    }

    #[tokio::test]
    async fn near_end_during_fetch_is_not_dispatched() {
        let gate = Arc::new(Notify::new());
        let source = Arc::new(ScriptedSource {
            responses: Mutex::new(vec![Ok(vec![product(1, Decimal::ONE)])].into()),
            gate: Some(gate.clone()),
            ..ScriptedSource::default()
        });
        let store = Arc::new(storefront(source.clone(), Arc::new(BlobRepository::default())));

        let mounting = tokio::spawn({
            let store = store.clone();
            async move { store.mount_list().await }
        });
        while store.pagination_status().phase != PaginationPhase::Loading {
            tokio::task::yield_now().await;
        }

        let reports = store.near_end().await;
        assert_eq!(reports, vec![FetchReport::Skipped { reason: IgnoredSignal::AlreadyLoading }]);
        assert_eq!(source.requests().len(), 1);

        gate.notify_one();
        mounting.await.expect("mount task");
        assert_eq!(store.pagination_status().phase, PaginationPhase::Idle);
        assert_eq!(source.requests().len(), 1);
    }

    #[tokio::test]
    async fn failed_fetch_returns_to_idle_without_products() {
        let source = Arc::new(ScriptedSource::with(vec![Err(CatalogFetchError::Status {
            status: 503,
            url: "https://catalog.example/products".to_string(),
        })]));
        let store = storefront(source, Arc::new(BlobRepository::default()));

        let reports = store.mount_list().await;

        assert!(matches!(reports[0], FetchReport::Failed { page: 1, .. }));
        assert_eq!(store.pagination_status().phase, PaginationPhase::Idle);
        assert!(store.snapshot().catalog.is_empty());
    }

    #[tokio::test]
    async fn search_change_fetches_page_one_and_keeps_previous_products() {
        let source = Arc::new(ScriptedSource::with(vec![
            Ok(vec![product(1, Decimal::ONE), product(2, Decimal::ONE)]),
            Ok(vec![product(9, Decimal::ONE)]),
        ]));
        let store = storefront(source.clone(), Arc::new(BlobRepository::default()));
        store.mount_list().await;
        store.near_end().await;

        store.change_search("shoes").await;

        let last = source.requests().last().cloned().expect("search request");
        assert_eq!(last, PageRequest::new(1, "shoes"));
        let catalog = store.snapshot().catalog;
        assert!(catalog.contains(ProductId(1)));
        assert!(catalog.contains(ProductId(9)));
    }

    #[tokio::test(start_paused = true)]
    async fn debounced_search_only_fires_for_latest_input() {
        let source = Arc::new(ScriptedSource::default());
        let store = Arc::new(Storefront::new(
            source.clone(),
            Arc::new(BlobRepository::default()),
            StorefrontSettings { search_debounce: Duration::from_millis(500) },
        ));
        store.mount_list().await;

        let early = tokio::spawn({
            let store = store.clone();
            async move { store.debounced_search("sho").await }
        });
        tokio::time::sleep(Duration::from_millis(200)).await;
        let late = tokio::spawn({
            let store = store.clone();
            async move { store.debounced_search("shoes").await }
        });

        assert!(early.await.expect("early task").is_none());
        assert!(late.await.expect("late task").is_some());

        let searches: Vec<String> =
            source.requests().into_iter().map(|request| request.search).collect();
        assert_eq!(searches, vec!["".to_string(), "shoes".to_string()]);
    }

    #[tokio::test]
    async fn product_route_for_unknown_id_renders_not_found() {
        let store =
            storefront(Arc::new(ScriptedSource::default()), Arc::new(BlobRepository::default()));

        assert_eq!(store.view(Route::parse("/product/77")), View::NotFound);
        assert_eq!(store.checkout().message, "Checkout coming soon");
    }
}
