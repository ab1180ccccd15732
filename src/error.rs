use std::path::PathBuf;
use thiserror::Error;

/// Anything that stops a search page from arriving intact.
///
/// The variants only exist so the log says what went wrong; the session
/// treats every one of them the same way.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("GitHub API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed search response: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("can't read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can't build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
