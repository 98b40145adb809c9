//! Search state and its transitions
//!
//! `SearchState` is the whole of what a rendering layer displays. It only
//! changes through user input (`set_mode`, `set_value`) and the three search
//! transitions: `begin_search`, `search_succeeded` and `search_failed`.
//!
//! Every `begin_search` hands out a ticket carrying a new generation. Only the
//! ticket of the latest invocation may complete the search; completions for
//! older tickets are reported as [`Completion::Stale`] and leave the state
//! untouched, so a slow earlier response cannot overwrite a newer one.

use crate::mode::SearchMode;
use crate::results::{is_exact_match, SearchResult};
use serde::Serialize;

/// Monotonically increasing search generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Generation(u64);

impl Generation {
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle for one in-flight search, issued by [`SearchState::begin_search`].
///
/// Captures the mode and value the search was started with; edits made
/// while the request is in flight do not affect how its response is read.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub generation: Generation,
    pub mode: SearchMode,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Loading,
}

/// Outcome of applying a completion to the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The ticket was current and the state was updated
    Applied,
    /// A newer search superseded this ticket; nothing changed
    Stale,
}

/// Read-only snapshot handed to renderers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchView {
    pub mode: SearchMode,
    pub value: String,
    pub loading: bool,
    pub exact_match: bool,
    pub results: SearchResult,
}

#[derive(Debug, Clone)]
pub struct SearchState {
    mode: SearchMode,
    value: String,
    results: SearchResult,
    exact_match: bool,
    generation: Generation,
    in_flight: Option<Generation>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(SearchMode::default())
    }
}

impl SearchState {
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            value: String::new(),
            results: SearchResult::default(),
            exact_match: true,
            generation: Generation::default(),
            in_flight: None,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn results(&self) -> &SearchResult {
        &self.results
    }

    pub fn is_exact_match(&self) -> bool {
        self.exact_match
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading() {
            Phase::Loading
        } else {
            Phase::Idle
        }
    }

    /// Switch the search field. The typed value is kept.
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Enter `Loading` and issue the ticket for a new search.
    pub fn begin_search(&mut self) -> SearchTicket {
        self.generation = self.generation.next();
        self.in_flight = Some(self.generation);
        SearchTicket {
            generation: self.generation,
            mode: self.mode,
            value: self.value.clone(),
        }
    }

    /// Replace the results with a successful response and return to `Idle`.
    pub fn search_succeeded(&mut self, ticket: &SearchTicket, results: SearchResult) -> Completion {
        if !self.is_current(ticket) {
            return Completion::Stale;
        }
        self.exact_match = is_exact_match(ticket.mode, &ticket.value, &results);
        self.results = results;
        self.in_flight = None;
        Completion::Applied
    }

    /// Return to `Idle` keeping the previous results.
    pub fn search_failed(&mut self, ticket: &SearchTicket) -> Completion {
        if !self.is_current(ticket) {
            return Completion::Stale;
        }
        self.in_flight = None;
        Completion::Applied
    }

    pub fn view(&self) -> SearchView {
        SearchView {
            mode: self.mode,
            value: self.value.clone(),
            loading: self.is_loading(),
            exact_match: self.exact_match,
            results: self.results.clone(),
        }
    }

    fn is_current(&self, ticket: &SearchTicket) -> bool {
        self.in_flight == Some(ticket.generation)
    }
}
