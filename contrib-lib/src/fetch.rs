use crate::result::GitHubClientResult;
use async_trait::async_trait;
use reqwest::Url;

/// Raw body of one response, plus the `rel="next"` link when the endpoint
/// is paginated.
#[derive(Debug, Default)]
pub struct Page {
    pub body: Vec<u8>,
    pub next_url: Option<Url>,
}

impl Page {
    pub fn new<B>(body: B) -> Self
    where
        B: Into<Vec<u8>>,
    {
        Self {
            body: body.into(),
            next_url: None,
        }
    }
}

/// Transport used by the lookup. [`crate::GitHubClient`] is the real one;
/// tests substitute their own.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch_page(&self, url: &str) -> GitHubClientResult<Page>;

    async fn fetch(&self, url: &str) -> GitHubClientResult<Vec<u8>> {
        Ok(self.fetch_page(url).await?.body)
    }
}
