use crate::session::{SearchSession, SearchStatus};
use crate::types::RepositorySummary;
use std::io::{self, Write};

pub const TITLE: &str = "GitHub Repository Explorer";
const NO_DESCRIPTION: &str = "No description available";

pub fn write_card(out: &mut impl Write, repo: &RepositorySummary) -> io::Result<()> {
    writeln!(out, "  {} ({})", repo.owner_login, repo.owner_profile_url)?;
    writeln!(out, "    avatar: {}", repo.owner_avatar_url)?;
    writeln!(out, "  {}", repo.name)?;
    writeln!(out, "    {}", repo.repository_url)?;
    writeln!(
        out,
        "    {}",
        repo.description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(NO_DESCRIPTION)
    )?;
    writeln!(out, "    Stars: {}", repo.star_count)?;
    writeln!(out, "    Forks: {}", repo.fork_count)?;
    writeln!(out, "    Open Issues: {}", repo.open_issue_count)?;
    writeln!(out)
}

/// Status line for the session, if there is anything to say.
pub fn status_line(session: &SearchSession) -> Option<String> {
    match session.status() {
        SearchStatus::Idle => None,
        SearchStatus::Loading => Some("Loading...".to_string()),
        SearchStatus::Error => session.error_message().map(str::to_string),
        SearchStatus::Success if session.results().is_empty() => {
            Some("No repositories found.".to_string())
        }
        SearchStatus::Success => Some(format!(
            "Showing {} repositories for \"{}\" ({} page{})",
            session.results().len(),
            session.query().term(),
            session.loaded_pages(),
            if session.loaded_pages() == 1 { "" } else { "s" }
        )),
    }
}

/// Prints cards from `from` onwards, then the status and the load-more hint.
pub fn write_session(
    out: &mut impl Write,
    session: &SearchSession,
    from: usize,
    more_hint: &str,
) -> io::Result<()> {
    for repo in session.results().iter().skip(from) {
        write_card(out, repo)?;
    }
    if let Some(line) = status_line(session) {
        writeln!(out, "{}", line)?;
    }
    if session.can_load_more() && !more_hint.is_empty() {
        writeln!(out, "{}", more_hint)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SearchQuery;
    use crate::types::summary;

    fn rendered(session: &SearchSession, from: usize) -> String {
        let mut buf = Vec::new();
        write_session(&mut buf, session, from, "(more available)").unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn card_shows_counts_and_fallback_description() {
        let mut repo = summary(1, "hello-world");
        repo.star_count = 42;
        repo.fork_count = 7;
        repo.open_issue_count = 3;

        let mut buf = Vec::new();
        write_card(&mut buf, &repo).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("octocat (https://github.com/octocat)"));
        assert!(text.contains("hello-world"));
        assert!(text.contains(NO_DESCRIPTION));
        assert!(text.contains("Stars: 42"));
        assert!(text.contains("Forks: 7"));
        assert!(text.contains("Open Issues: 3"));
    }

    #[test]
    fn only_missing_or_empty_description_falls_back() {
        let render = |description: Option<&str>| {
            let mut repo = summary(1, "hello-world");
            repo.description = description.map(str::to_string);
            let mut buf = Vec::new();
            write_card(&mut buf, &repo).unwrap();
            String::from_utf8(buf).unwrap()
        };

        assert!(render(Some("")).contains(NO_DESCRIPTION));
        assert!(!render(Some("   ")).contains(NO_DESCRIPTION));
        assert!(render(Some("Greetings")).contains("    Greetings\n"));
    }

    #[test]
    fn idle_session_prints_nothing() {
        assert_eq!(rendered(&SearchSession::new(), 0), "");
    }

    #[test]
    fn loading_and_error_lines() {
        let (session, request) = SearchSession::new().begin(SearchQuery::first_page("react"));
        assert_eq!(status_line(&session).as_deref(), Some("Loading..."));

        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let session = session.resolve(&request.unwrap(), Err(crate::error::FetchError::Decode(err)));
        assert_eq!(
            status_line(&session).as_deref(),
            Some(crate::session::FETCH_ERROR_MESSAGE)
        );
    }

    #[test]
    fn hint_only_with_results() {
        let (session, request) = SearchSession::new().begin(SearchQuery::first_page("xyz"));
        let empty = session.clone().resolve(request.as_ref().unwrap(), Ok(vec![]));
        let text = rendered(&empty, 0);
        assert!(text.contains("No repositories found."));
        assert!(!text.contains("(more available)"));

        let full = session.resolve(request.as_ref().unwrap(), Ok(vec![summary(1, "a"), summary(2, "b")]));
        let text = rendered(&full, 1);
        assert!(!text.contains("  a\n"));
        assert!(text.contains("  b\n"));
        assert!(text.contains("Showing 2 repositories for \"xyz\" (1 page)"));
        assert!(text.contains("(more available)"));
    }
}
