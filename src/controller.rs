use crate::error::FetchError;
use crate::github::RepositorySearch;
use crate::session::{SearchQuery, SearchRequest, SearchSession};
use crate::types::RepositorySummary;

/// The two things a user can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    Submit,
    LoadMore,
}

/// Turns user actions into search requests and feeds the answers back
/// into the session.
#[derive(Debug, Default)]
pub struct QueryController {
    term: String,
    session: SearchSession,
}

impl QueryController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn set_term(&mut self, text: impl Into<String>) {
        self.term = text.into();
    }

    /// Starts a fresh search from page 1. Nothing happens for a blank term
    /// or while a request is in flight.
    pub fn submit_search(&mut self) -> Option<SearchRequest> {
        let term = self.term.trim();
        if term.is_empty() {
            return None;
        }
        let query = SearchQuery::first_page(term);
        self.begin(query)
    }

    /// Asks for the page after the last one that loaded, for the term that
    /// produced the current results.
    pub fn load_more(&mut self) -> Option<SearchRequest> {
        if !self.session.can_load_more() {
            return None;
        }
        let query = SearchQuery::page_of(
            self.session.query().term(),
            self.session.loaded_pages() + 1,
        );
        self.begin(query)
    }

    pub fn complete(
        &mut self,
        request: &SearchRequest,
        outcome: Result<Vec<RepositorySummary>, FetchError>,
    ) {
        let session = std::mem::take(&mut self.session);
        self.session = session.resolve(request, outcome);
    }

    /// Performs `action` against `backend` and waits for the answer.
    ///
    /// Returns `false` when the action didn't issue a request.
    pub fn run<S: RepositorySearch + ?Sized>(&mut self, action: SearchAction, backend: &S) -> bool {
        let request = match action {
            SearchAction::Submit => self.submit_search(),
            SearchAction::LoadMore => self.load_more(),
        };
        let Some(request) = request else {
            return false;
        };

        let outcome = backend.search(&request);
        self.complete(&request, outcome);
        true
    }

    fn begin(&mut self, query: SearchQuery) -> Option<SearchRequest> {
        let session = std::mem::take(&mut self.session);
        let (session, request) = session.begin(query);
        self.session = session;
        request
    }
}
