use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::product::Product;
use crate::fetch::PageRequest;
use crate::store::{reduce, PersistedState, StoreAction};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationPhase {
    Idle,
    Loading,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginationTrigger {
    Mount,
    NearEnd,
    SearchChanged,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub correlation_id: String,
    pub trigger: PaginationTrigger,
    pub request: PageRequest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredSignal {
    AlreadyLoading,
    NotObserving,
    SearchUnchanged,
    /// Remembered and dispatched once the in-flight fetch completes.
    SearchQueued,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignalOutcome {
    Dispatch(FetchTicket),
    Ignored(IgnoredSignal),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationStatus {
    pub phase: PaginationPhase,
    pub page: u32,
    pub search: String,
    pub observing: bool,
}

/// Drives "load next page" requests for the product list.
///
/// Only one fetch is ever in flight: signals that arrive while loading are
/// dropped, except search changes which are queued (latest wins).
#[derive(Clone, Debug)]
pub struct PaginationController {
    phase: PaginationPhase,
    page: u32,
    last_loaded_page: u32,
    search: String,
    observing: bool,
    pending_search: Option<String>,
    in_flight: Option<String>,
}

impl Default for PaginationController {
    fn default() -> Self {
        Self {
            phase: PaginationPhase::Idle,
            page: 0,
            last_loaded_page: 0,
            search: String::new(),
            observing: false,
            pending_search: None,
            in_flight: None,
        }
    }
}

impl PaginationController {
    pub fn phase(&self) -> PaginationPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == PaginationPhase::Loading
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_observing(&self) -> bool {
        self.observing
    }

    pub fn status(&self) -> PaginationStatus {
        PaginationStatus {
            phase: self.phase,
            page: self.page,
            search: self.search.clone(),
            observing: self.observing,
        }
    }

    /// The list view appeared: start from page 1 with no search filter.
    pub fn mount(&mut self) -> SignalOutcome {
        self.observing = true;
        if self.is_loading() {
            self.pending_search = Some(String::new());
            return SignalOutcome::Ignored(IgnoredSignal::SearchQueued);
        }
        self.restart(String::new(), PaginationTrigger::Mount)
    }

    /// The list view went away. An in-flight fetch still completes.
    pub fn unmount(&mut self) {
        self.observing = false;
        self.pending_search = None;
    }

    pub fn near_end(&mut self) -> SignalOutcome {
        if !self.observing {
            return SignalOutcome::Ignored(IgnoredSignal::NotObserving);
        }
        if self.is_loading() {
            return SignalOutcome::Ignored(IgnoredSignal::AlreadyLoading);
        }
        self.page = self.page.saturating_add(1);
        self.dispatch(PaginationTrigger::NearEnd)
    }

    pub fn change_search(&mut self, term: impl Into<String>) -> SignalOutcome {
        let term = term.into();
        if !self.observing {
            return SignalOutcome::Ignored(IgnoredSignal::NotObserving);
        }

        let target = self.pending_search.as_deref().unwrap_or(&self.search);
        if term == target {
            return SignalOutcome::Ignored(IgnoredSignal::SearchUnchanged);
        }

        if self.is_loading() {
            if term == self.search {
                self.pending_search = None;
                return SignalOutcome::Ignored(IgnoredSignal::SearchUnchanged);
            }
            self.pending_search = Some(term);
            return SignalOutcome::Ignored(IgnoredSignal::SearchQueued);
        }

        self.restart(term, PaginationTrigger::SearchChanged)
    }

    /// Returns the controller to idle after the fetch for `ticket` resolved.
    ///
    /// A failed fetch rolls the page counter back so the next near-end signal
    /// retries it. If a search change was queued, its ticket is returned.
    pub fn complete(&mut self, ticket: &FetchTicket, succeeded: bool) -> Option<FetchTicket> {
        if self.in_flight.as_deref() != Some(ticket.correlation_id.as_str()) {
            return None;
        }

        self.in_flight = None;
        self.phase = PaginationPhase::Idle;
        if succeeded {
            self.last_loaded_page = ticket.request.page;
        } else {
            self.page = self.last_loaded_page;
        }

        let pending = self.pending_search.take()?;
        if !self.observing {
            return None;
        }
        match self.restart(pending, PaginationTrigger::SearchChanged) {
            SignalOutcome::Dispatch(next) => Some(next),
            SignalOutcome::Ignored(_) => None,
        }
    }

    /// The fetch for `ticket` was cancelled before it resolved. Behaves like a
    /// failure but drops any queued search instead of dispatching it.
    pub fn abandon(&mut self, ticket: &FetchTicket) {
        if self.in_flight.as_deref() != Some(ticket.correlation_id.as_str()) {
            return;
        }
        self.in_flight = None;
        self.phase = PaginationPhase::Idle;
        self.page = self.last_loaded_page;
        self.pending_search = None;
    }

    fn restart(&mut self, search: String, trigger: PaginationTrigger) -> SignalOutcome {
        self.search = search;
        self.page = 1;
        self.last_loaded_page = 0;
        self.dispatch(trigger)
    }

    fn dispatch(&mut self, trigger: PaginationTrigger) -> SignalOutcome {
        let ticket = FetchTicket {
            correlation_id: Uuid::new_v4().to_string(),
            trigger,
            request: PageRequest::new(self.page, self.search.clone()),
        };
        self.phase = PaginationPhase::Loading;
        self.in_flight = Some(ticket.correlation_id.clone());
        SignalOutcome::Dispatch(ticket)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSummary {
    pub added: usize,
    pub skipped: usize,
}

/// Adds fetched products that the catalog has not seen yet.
///
/// Known ids are skipped, never overwritten, so a product's fields are frozen
/// at first sight. Results are additive: nothing is removed on a new search.
pub fn merge_page(
    mut state: PersistedState,
    products: Vec<Product>,
) -> (PersistedState, MergeSummary) {
    let mut summary = MergeSummary::default();
    for product in products {
        if state.catalog.find_by_id(product.id).is_some() {
            summary.skipped += 1;
            continue;
        }
        state = reduce(state, StoreAction::AddProduct(product)).state;
        summary.added += 1;
    }
    (state, summary)
}
