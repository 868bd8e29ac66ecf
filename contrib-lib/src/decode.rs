use crate::error::GitHubClientError;
use crate::fetch::Fetch;
use crate::result::GitHubClientResult;
use log::debug;
use serde::de::DeserializeOwned;
use std::any::type_name;
use std::collections::HashSet;

/// How much of a paginated list endpoint to read.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Pages {
    /// Only the page the URL points at.
    #[default]
    First,
    /// Follow `rel="next"` links, one request at a time, until they run out.
    All,
}

pub fn decode<T>(bytes: &[u8]) -> GitHubClientResult<T>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(bytes).map_err(|e| GitHubClientError::Decode {
        type_name: type_name::<T>(),
        source: e,
    })
}

pub async fn fetch_json<T, F>(fetcher: &F, url: &str) -> GitHubClientResult<T>
where
    T: DeserializeOwned,
    F: Fetch + ?Sized,
{
    let body = fetcher.fetch(url).await?;
    decode(&body)
}

/// Fetches a JSON array. Items from later pages are appended after earlier
/// ones, so the original order is kept.
pub async fn fetch_json_list<T, F>(fetcher: &F, url: &str, pages: Pages) -> GitHubClientResult<Vec<T>>
where
    T: DeserializeOwned,
    F: Fetch + ?Sized,
{
    let mut items = Vec::new();
    let mut visited = HashSet::new();
    let mut next = Some(String::from(url));
    while let Some(page_url) = next.take() {
        let page = fetcher.fetch_page(&page_url).await?;
        items.extend(decode::<Vec<T>>(&page.body)?);
        visited.insert(page_url);

        match (pages, page.next_url) {
            (Pages::All, Some(next_url)) if visited.contains(next_url.as_str()) => {
                debug!("not following {next_url} again, it was already read")
            }
            (Pages::All, Some(next_url)) => next = Some(next_url.to_string()),
            (Pages::First, Some(next_url)) => {
                debug!("not following {next_url}, only the first page was requested")
            }
            (_, None) => {}
        }
    }

    Ok(items)
}
