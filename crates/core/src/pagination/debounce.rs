use std::time::Duration;

pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Trailing debounce for search input.
///
/// Each keystroke bumps a generation. A waiter that wakes after the quiet
/// period only gets the term back if no newer input arrived meanwhile.
#[derive(Clone, Debug)]
pub struct SearchDebouncer {
    quiet_period: Duration,
    generation: u64,
    latest: Option<String>,
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}

impl SearchDebouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self { quiet_period, generation: 0, latest: None }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    pub fn input(&mut self, term: impl Into<String>) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.latest = Some(term.into());
        self.generation
    }

    pub fn settle(&mut self, generation: u64) -> Option<String> {
        if generation != self.generation {
            return None;
        }
        self.latest.take()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{SearchDebouncer, DEFAULT_SEARCH_DEBOUNCE};

    #[test]
    fn only_latest_input_settles() {
        let mut debouncer = SearchDebouncer::default();
        let first = debouncer.input("s");
        let second = debouncer.input("sh");
        let third = debouncer.input("shoes");

        assert_eq!(debouncer.settle(first), None);
        assert_eq!(debouncer.settle(second), None);
        assert_eq!(debouncer.settle(third).as_deref(), Some("shoes"));
    }

    #[test]
    fn settled_term_is_delivered_once() {
        let mut debouncer = SearchDebouncer::new(Duration::from_millis(10));
        let generation = debouncer.input("bag");

        assert!(debouncer.settle(generation).is_some());
        assert!(debouncer.settle(generation).is_none());
    }

    #[test]
    fn default_quiet_period_is_half_a_second() {
        assert_eq!(SearchDebouncer::default().quiet_period(), DEFAULT_SEARCH_DEBOUNCE);
        assert_eq!(DEFAULT_SEARCH_DEBOUNCE, Duration::from_millis(500));
    }
}
