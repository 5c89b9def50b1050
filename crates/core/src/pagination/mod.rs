pub mod controller;
pub mod debounce;

pub use controller::{
    merge_page, FetchTicket, IgnoredSignal, MergeSummary, PaginationController, PaginationPhase,
    PaginationStatus, PaginationTrigger, SignalOutcome,
};
pub use debounce::{SearchDebouncer, DEFAULT_SEARCH_DEBOUNCE};
