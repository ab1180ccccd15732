use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct GitHubOwner {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GitHubRepo {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    pub owner: GitHubOwner,
}

#[derive(Deserialize, Debug)]
pub struct GitHubSearchResponse {
    pub items: Vec<GitHubRepo>,
}

/// One search hit, as shown on a result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    pub owner_login: String,
    pub owner_avatar_url: String,
    pub owner_profile_url: String,
    pub repository_url: String,
    pub description: Option<String>,
    pub star_count: u64,
    pub fork_count: u64,
    pub open_issue_count: u64,
}

impl From<GitHubRepo> for RepositorySummary {
    fn from(repo: GitHubRepo) -> Self {
        RepositorySummary {
            id: repo.id,
            name: repo.name,
            owner_login: repo.owner.login,
            owner_avatar_url: repo.owner.avatar_url,
            owner_profile_url: repo.owner.html_url,
            repository_url: repo.html_url,
            description: repo.description,
            star_count: repo.stargazers_count,
            fork_count: repo.forks_count,
            open_issue_count: repo.open_issues_count,
        }
    }
}

#[cfg(test)]
pub(crate) fn summary(id: u64, name: &str) -> RepositorySummary {
    RepositorySummary {
        id,
        name: name.to_string(),
        owner_login: "octocat".to_string(),
        owner_avatar_url: "https://avatars.githubusercontent.com/u/583231".to_string(),
        owner_profile_url: "https://github.com/octocat".to_string(),
        repository_url: format!("https://github.com/octocat/{}", name),
        description: None,
        star_count: 0,
        fork_count: 0,
        open_issue_count: 0,
    }
}
