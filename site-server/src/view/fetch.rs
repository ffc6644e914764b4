//! Fetch sequencing for one list
//!
//! Each fetch takes a [`Ticket`]; only the result carrying the newest ticket
//! is applied, so a slow response cannot overwrite a newer one.

use store_client::StoreResult;

use super::placeholder::{EmptyState, Placeholder};
use super::state::{ErrorDisplay, Render, ViewState};

/// Sequence number of one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// State of one list plus the bookkeeping to apply results in order
#[derive(Debug)]
pub struct FetchController<T> {
    label: &'static str,
    state: ViewState<T>,
    issued: u64,
    placeholder: Placeholder,
    empty: &'static EmptyState,
    display: ErrorDisplay,
}

impl<T> FetchController<T> {
    /// Starts out loading
    pub fn new(label: &'static str, placeholder: Placeholder, empty: &'static EmptyState) -> Self {
        Self {
            label,
            state: ViewState::Loading,
            issued: 0,
            placeholder,
            empty,
            display: ErrorDisplay::default(),
        }
    }

    pub fn with_display(mut self, display: ErrorDisplay) -> Self {
        self.display = display;
        self
    }

    /// Enter loading and issue a fresh ticket
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.state = ViewState::Loading;
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Apply a result if `ticket` is still the newest one
    ///
    /// Returns whether the result was applied.
    pub fn commit(&mut self, ticket: Ticket, result: StoreResult<Vec<T>>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                view = self.label,
                ticket = ticket.0,
                latest = self.issued,
                "Discarding stale fetch result"
            );
            return false;
        }
        if let Err(e) = &result {
            tracing::error!(view = self.label, error = %e, "Fetch failed");
        }
        self.state = ViewState::from_result(result);
        true
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        self.state.items()
    }

    pub fn render(&self) -> Render<'_, T> {
        self.state.render(self.display, self.placeholder, self.empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::placeholder;
    use store_client::StoreError;

    fn controller() -> FetchController<u32> {
        FetchController::new("test", placeholder::EVENTS, &placeholder::UPCOMING_EVENTS_EMPTY)
    }

    #[test]
    fn test_starts_loading() {
        let c = controller();
        assert!(c.state().is_loading());
        assert_eq!(c.render(), Render::Skeleton(placeholder::EVENTS));
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut c = controller();
        let first = c.begin();
        let second = c.begin();
        assert!(first < second);

        // Newer request answers first, then the old one straggles in
        assert!(c.commit(second, Ok(vec![2])));
        assert!(!c.commit(first, Ok(vec![1])));
        assert_eq!(c.items(), &[2]);
    }

    #[test]
    fn test_stale_result_while_loading_keeps_loading() {
        let mut c = controller();
        let first = c.begin();
        let _second = c.begin();
        assert!(!c.commit(first, Ok(vec![1])));
        assert!(c.state().is_loading());
    }

    #[test]
    fn test_error_paths() {
        let mut c = controller();
        let t = c.begin();
        c.commit(t, Err(StoreError::Unavailable("down".into())));
        assert_eq!(
            c.render(),
            Render::EmptyState(&placeholder::UPCOMING_EVENTS_EMPTY)
        );

        let mut c = controller().with_display(ErrorDisplay::Banner);
        let t = c.begin();
        c.commit(t, Err(StoreError::Unavailable("down".into())));
        assert_eq!(c.render(), Render::ErrorBanner("Store unavailable: down"));
    }

    #[test]
    fn test_empty_result() {
        let mut c = controller();
        let t = c.begin();
        c.commit(t, Ok(vec![]));
        assert_eq!(c.state(), &ViewState::Empty);
    }
}
