use crate::error::GitHubClientError;
use crate::fetch::{Fetch, Page};
use crate::link_urls::next_page_url;
use crate::logging_middleware::LoggingMiddleware;
use crate::object_model::ApiErrorBody;
use crate::result::GitHubClientResult;
use anyhow::anyhow;
use async_trait::async_trait;
use log::Level;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, IntoUrl, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use std::time::Duration;

const USER_AGENT_NAME: &str = "contrib-lib";

#[derive(Clone, Debug)]
pub struct ClientOptions {
    /// Sent as a bearer token. Anonymous requests are heavily rate limited.
    pub token: Option<String>,
    pub timeout: Option<Duration>,
    /// Level at which requests and responses are logged.
    pub log_level: Level,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            token: None,
            timeout: None,
            log_level: Level::Debug,
        }
    }
}

/// [`Fetch`] over HTTP. Holds one pooled connection set for the lifetime of
/// the lookup.
pub struct GitHubClient {
    inner: ClientWithMiddleware,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(options: ClientOptions) -> GitHubClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(GitHubClientError::Client)?;

        Ok(Self {
            inner: ClientBuilder::new(client)
                .with(LoggingMiddleware::new(options.log_level))
                .build(),
            token: options.token,
        })
    }
}

#[async_trait]
impl Fetch for GitHubClient {
    async fn fetch_page(&self, url: &str) -> GitHubClientResult<Page> {
        let parsed = parse_url(url).map_err(|e| GitHubClientError::InvalidUrl {
            url: String::from(url),
            source: e,
        })?;

        let mut request_builder = self
            .inner
            .get(parsed)
            .header(USER_AGENT, USER_AGENT_NAME)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");
        if let Some(token) = &self.token {
            request_builder = request_builder.bearer_auth(token);
        }

        let response = request_builder
            .send()
            .await
            .map_err(|e| GitHubClientError::Fetch {
                url: String::from(url),
                source: anyhow!(e),
            })?;

        let status = response.status();
        let next_url = next_page_url(url, response.headers());
        let body = response
            .bytes()
            .await
            .map_err(|e| GitHubClientError::Fetch {
                url: String::from(url),
                source: anyhow!(e),
            })?;

        if !status.is_success() {
            return Err(GitHubClientError::Status {
                url: String::from(url),
                status,
                message: error_message(&body),
            });
        }

        Ok(Page {
            body: body.to_vec(),
            next_url,
        })
    }
}

fn parse_url<U>(url: U) -> reqwest::Result<Url>
where
    U: IntoUrl,
{
    url.into_url()
}

/// GitHub explains failures in a JSON `message`; anything else is passed
/// through as text.
fn error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(ApiErrorBody { message }) => message,
        Err(_) => String::from_utf8_lossy(body).trim().to_string(),
    }
}
