//! Search session state and its transitions.
//!
//! A [`SearchSession`] is only ever changed by consuming it and returning the
//! next one, so every transition can be tested without a terminal or network.

use crate::error::FetchError;
use crate::types::RepositorySummary;

/// Results requested per page.
pub const PAGE_SIZE: u32 = 12;

/// The only failure text the user ever sees; details go to the log.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching repositories";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    page: u32,
}

impl SearchQuery {
    pub fn first_page(term: impl Into<String>) -> Self {
        SearchQuery {
            term: term.into(),
            page: 1,
        }
    }

    pub fn page_of(term: impl Into<String>, page: u32) -> Self {
        SearchQuery {
            term: term.into(),
            page: page.max(1),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> u32 {
        self.page
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// A request handed to the search backend.
///
/// The generation identifies which `begin` produced it, so an outcome can be
/// matched against the request the session is actually waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: SearchQuery,
    pub per_page: u32,
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    query: SearchQuery,
    results: Vec<RepositorySummary>,
    status: SearchStatus,
    error_message: Option<String>,
    loaded_pages: u32,
    generation: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        SearchSession {
            query: SearchQuery::first_page(""),
            results: Vec::new(),
            status: SearchStatus::Idle,
            error_message: None,
            loaded_pages: 0,
            generation: 0,
        }
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently issued query (the in-flight one while loading).
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn results(&self) -> &[RepositorySummary] {
        &self.results
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Highest page merged into `results`; 0 before the first success.
    pub fn loaded_pages(&self) -> u32 {
        self.loaded_pages
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    pub fn can_load_more(&self) -> bool {
        !self.is_loading() && self.loaded_pages >= 1 && !self.results.is_empty()
    }

    /// Moves to `Loading` for `query`.
    ///
    /// Returns no request while another one is still in flight; the session
    /// comes back untouched in that case.
    pub fn begin(mut self, query: SearchQuery) -> (Self, Option<SearchRequest>) {
        if self.is_loading() {
            log::debug!(
                "Ignoring search for {:?} page {}: request already in flight",
                query.term(),
                query.page()
            );
            return (self, None);
        }

        self.generation += 1;
        self.status = SearchStatus::Loading;
        self.error_message = None;
        if query.page() == 1 {
            // A fresh search owns no pages until its first one lands.
            self.loaded_pages = 0;
        }
        self.query = query.clone();

        let request = SearchRequest {
            query,
            per_page: PAGE_SIZE,
            generation: self.generation,
        };
        log::debug!(
            "Searching {:?} page {} (generation {})",
            request.query.term(),
            request.query.page(),
            request.generation
        );
        (self, Some(request))
    }

    /// Applies the backend's answer to `request`.
    pub fn resolve(
        self,
        request: &SearchRequest,
        outcome: Result<Vec<RepositorySummary>, FetchError>,
    ) -> Self {
        if !self.is_loading() || request.generation != self.generation {
            log::warn!(
                "Discarding stale result for {:?} page {} (generation {}, current {})",
                request.query.term(),
                request.query.page(),
                request.generation,
                self.generation
            );
            return self;
        }

        match outcome {
            Ok(items) => self.succeed(request.query.page(), items),
            Err(e) => self.fail(e),
        }
    }

    fn succeed(mut self, page: u32, items: Vec<RepositorySummary>) -> Self {
        log::debug!("Page {} returned {} repositories", page, items.len());
        if page == 1 {
            self.results = items;
        } else {
            self.results.extend(items);
        }
        self.loaded_pages = page;
        self.status = SearchStatus::Success;
        self
    }

    fn fail(mut self, error: FetchError) -> Self {
        log::error!(
            "Search for {:?} page {} failed: {}",
            self.query.term(),
            self.query.page(),
            error
        );
        self.status = SearchStatus::Error;
        self.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
        self
    }
}
