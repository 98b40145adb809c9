//! Search session: owns the `SearchState` and drives it around the network call
//!
//! The session never holds its state lock across an `.await`, so several
//! searches may be in flight at once. Only the most recent one is allowed to
//! update the state; see `reelfind_core::state`.

use crate::service_client::SearchClient;
use reelfind_core::{
    Completion, SearchError, SearchMode, SearchResult, SearchState, SearchTicket, SearchView,
};
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};

pub struct SearchSession {
    client: SearchClient,
    state: Mutex<SearchState>,
}

impl SearchSession {
    pub fn new(client: SearchClient, mode: SearchMode) -> Self {
        Self {
            client,
            state: Mutex::new(SearchState::new(mode)),
        }
    }

    pub fn client(&self) -> &SearchClient {
        &self.client
    }

    pub fn set_mode(&self, mode: SearchMode) {
        self.lock().set_mode(mode);
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.lock().set_value(value);
    }

    pub fn view(&self) -> SearchView {
        self.lock().view()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading()
    }

    /// Run a search with the current mode and value.
    ///
    /// The state enters `Loading` as soon as this is called, before the
    /// returned future is first polled. On failure the error is logged and
    /// returned; the state keeps its previous results either way.
    /// `Completion::Stale` means a newer search was started while this one
    /// was in flight and its response was dropped.
    pub fn search(&self) -> impl Future<Output = Result<Completion, SearchError>> + Send + '_ {
        let ticket = self.lock().begin_search();
        let guard = LoadingGuard::new(&self.state, ticket.clone());

        async move {
            match self.client.search(ticket.mode, &ticket.value).await {
                Ok(results) => {
                    let completion = guard.succeed(results);
                    if completion == Completion::Stale {
                        tracing::debug!(generation = %ticket.generation, "discarding stale search response");
                    }
                    Ok(completion)
                }
                Err(err) => {
                    tracing::warn!(
                        mode = %ticket.mode,
                        value = %ticket.value,
                        error = %err,
                        "search failed"
                    );
                    guard.fail();
                    Err(err)
                }
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases the loading flag of one search on every exit path.
///
/// Dropping the guard without completing it (the search future was
/// cancelled) counts as a failure.
struct LoadingGuard<'a> {
    state: &'a Mutex<SearchState>,
    ticket: Option<SearchTicket>,
}

impl<'a> LoadingGuard<'a> {
    fn new(state: &'a Mutex<SearchState>, ticket: SearchTicket) -> Self {
        Self {
            state,
            ticket: Some(ticket),
        }
    }

    fn succeed(mut self, results: SearchResult) -> Completion {
        match self.ticket.take() {
            Some(ticket) => self.lock().search_succeeded(&ticket, results),
            None => Completion::Stale,
        }
    }

    fn fail(mut self) -> Completion {
        match self.ticket.take() {
            Some(ticket) => self.lock().search_failed(&ticket),
            None => Completion::Stale,
        }
    }

    fn lock(&self) -> MutexGuard<'a, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            tracing::debug!(generation = %ticket.generation, "search dropped before completion");
            self.lock().search_failed(&ticket);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelfind_core::Phase;

    #[test]
    fn test_guard_drop_releases_loading() {
        let state = Mutex::new(SearchState::default());
        let ticket = state.lock().unwrap().begin_search();
        assert!(state.lock().unwrap().is_loading());

        drop(LoadingGuard::new(&state, ticket));
        assert_eq!(state.lock().unwrap().phase(), Phase::Idle);
    }

    #[test]
    fn test_guard_succeed_applies_results() {
        let state = Mutex::new(SearchState::default());
        state.lock().unwrap().set_value("Up");
        let ticket = state.lock().unwrap().begin_search();

        let guard = LoadingGuard::new(&state, ticket);
        let completion = guard.succeed(SearchResult::new(vec!["Up".to_string()]));
        assert_eq!(completion, Completion::Applied);

        let state = state.lock().unwrap();
        assert!(!state.is_loading());
        assert_eq!(state.results().items(), &["Up"]);
    }

    #[test]
    fn test_search_enters_loading_before_poll() {
        let session = SearchSession::new(SearchClient::new("http://127.0.0.1:1"), SearchMode::Title);
        let pending = session.search();
        assert!(session.is_loading());
        drop(pending);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_session_setters() {
        let session = SearchSession::new(SearchClient::new("http://127.0.0.1:1"), SearchMode::Title);
        session.set_mode(SearchMode::Budget);
        session.set_value("1000000");
        let view = session.view();
        assert_eq!(view.mode, SearchMode::Budget);
        assert_eq!(view.value, "1000000");
        assert!(!view.loading);
        assert!(!session.is_loading());
    }
}
