use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubClientError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid url ({url}): {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("error getting url ({url}): {source}")]
    Fetch {
        url: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("unexpected HTTP status {status} from {url}: {message}")]
    Status {
        url: String,
        status: StatusCode,
        message: String,
    },

    #[error("error parsing into {type_name}: {source}")]
    Decode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("no {what} to choose from: {source}")]
    NoCandidates {
        what: &'static str,
        #[source]
        source: EmptyInputError,
    },
}

/// Returned by [`crate::max_by`] when there is nothing to reduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input is empty")]
pub struct EmptyInputError;
