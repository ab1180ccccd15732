use crate::controller::{QueryController, SearchAction};
use crate::github::RepositorySearch;
use crate::render;
use crate::session::SearchStatus;
use std::io::{self, Write};

/// One-shot search: the first page, then up to `pages - 1` more.
pub fn search_repos(
    backend: &dyn RepositorySearch,
    term: &str,
    pages: u32,
    out: &mut impl Write,
) -> io::Result<SearchStatus> {
    let mut controller = QueryController::new();
    controller.set_term(term);

    if !controller.run(SearchAction::Submit, backend) {
        writeln!(out, "Nothing to search for.")?;
        return Ok(controller.session().status());
    }

    for _ in 1..pages.max(1) {
        if controller.session().status() != SearchStatus::Success {
            break;
        }
        let before = controller.session().results().len();
        if !controller.run(SearchAction::LoadMore, backend) {
            break;
        }
        if controller.session().results().len() == before {
            break;
        }
    }

    writeln!(out, "\n{}\n", render::TITLE)?;
    render::write_session(out, controller.session(), 0, "")?;
    Ok(controller.session().status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::session::SearchRequest;
    use crate::types::{summary, RepositorySummary};
    use std::cell::Cell;

    /// Serves `per_page` items for pages up to `last_page`, then empty pages.
    struct Paged {
        last_page: u32,
        fail_on: Option<u32>,
        calls: Cell<u32>,
    }

    impl RepositorySearch for Paged {
        fn search(&self, request: &SearchRequest) -> Result<Vec<RepositorySummary>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            let page = request.query.page();
            if self.fail_on == Some(page) {
                return Err(FetchError::Decode(
                    serde_json::from_str::<serde_json::Value>("[").unwrap_err(),
                ));
            }
            if page > self.last_page {
                return Ok(vec![]);
            }
            Ok((0..2u64)
                .map(|i| summary(u64::from(page) * 10 + i, &format!("repo-{page}-{i}")))
                .collect())
        }
    }

    fn run(backend: &Paged, term: &str, pages: u32) -> (SearchStatus, String) {
        let mut buf = Vec::new();
        let status = search_repos(backend, term, pages, &mut buf).unwrap();
        (status, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn loads_requested_number_of_pages() {
        let backend = Paged { last_page: 5, fail_on: None, calls: Cell::new(0) };
        let (status, text) = run(&backend, "react", 3);
        assert_eq!(status, SearchStatus::Success);
        assert_eq!(backend.calls.get(), 3);
        assert!(text.contains("repo-1-0"));
        assert!(text.contains("repo-3-1"));
        assert!(text.contains("Showing 6 repositories"));
    }

    #[test]
    fn stops_at_first_empty_page() {
        let backend = Paged { last_page: 1, fail_on: None, calls: Cell::new(0) };
        let (_, text) = run(&backend, "react", 4);
        assert_eq!(backend.calls.get(), 2);
        assert!(text.contains("Showing 2 repositories"));
    }

    #[test]
    fn stops_on_error_and_keeps_earlier_pages() {
        let backend = Paged { last_page: 5, fail_on: Some(2), calls: Cell::new(0) };
        let (status, text) = run(&backend, "react", 4);
        assert_eq!(status, SearchStatus::Error);
        assert_eq!(backend.calls.get(), 2);
        assert!(text.contains("repo-1-1"));
        assert!(text.contains(crate::session::FETCH_ERROR_MESSAGE));
    }

    #[test]
    fn blank_term_skips_the_request() {
        let backend = Paged { last_page: 5, fail_on: None, calls: Cell::new(0) };
        let (status, text) = run(&backend, "  ", 1);
        assert_eq!(status, SearchStatus::Idle);
        assert_eq!(backend.calls.get(), 0);
        assert!(text.contains("Nothing to search for."));
    }
}
