use crate::config::ExplorerConfig;
use crate::error::{ConfigError, FetchError};
use crate::session::SearchRequest;
use crate::types::{GitHubSearchResponse, RepositorySummary};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

/// Something that can answer a repository search, one page at a time.
pub trait RepositorySearch {
    fn search(&self, request: &SearchRequest) -> Result<Vec<RepositorySummary>, FetchError>;
}

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(ConfigError::Client)?;

        Ok(GitHubClient {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self, request: &SearchRequest) -> String {
        format!(
            "{}/search/repositories?q={}&per_page={}&page={}",
            self.base_url,
            urlencoding::encode(request.query.term()),
            request.per_page,
            request.query.page()
        )
    }
}

impl RepositorySearch for GitHubClient {
    fn search(&self, request: &SearchRequest) -> Result<Vec<RepositorySummary>, FetchError> {
        let url = self.search_url(request);
        log::debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .map_err(FetchError::Transport)?;

        let status = resp.status();
        let body = resp.text().map_err(FetchError::Transport)?;
        if !status.is_success() {
            return Err(FetchError::Status { status, body });
        }

        let result: GitHubSearchResponse =
            serde_json::from_str(&body).map_err(FetchError::Decode)?;
        Ok(result.items.into_iter().map(RepositorySummary::from).collect())
    }
}
