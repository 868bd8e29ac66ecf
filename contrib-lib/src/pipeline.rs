//! The lookup itself: five sequential requests and two reductions.
//!
//! Each stage consumes the previous stage's output, so nothing here runs
//! concurrently. The first failure ends the lookup and is returned as is.

use crate::decode::{fetch_json, fetch_json_list, Pages};
use crate::error::GitHubClientError;
use crate::fetch::Fetch;
use crate::object_model::{ApiRoot, Contributor, Organization, Repo, User};
use crate::reduce::max_by;
use crate::result::GitHubClientResult;
use log::{debug, info};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Progress of a lookup, in the order the stages are reached.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Stage {
    Start,
    DiscoveryFetched,
    OrgInfoFetched,
    ReposFetched,
    MostWatchedSelected,
    ContributorsFetched,
    TopContributorSelected,
    UserProfileFetched,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributorQuery {
    /// Root of the API; the discovery document is served here.
    pub api_url: String,
    pub organization: String,
    /// Applies to the repository and contributor lists.
    pub pages: Pages,
}

impl ContributorQuery {
    pub fn new<S>(organization: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            api_url: String::from(DEFAULT_API_URL),
            organization: organization.into(),
            pages: Pages::default(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributorReport {
    /// The organization's most-watched repository.
    pub repo: Repo,
    pub contributor: Contributor,
    pub user: User,
}

/// Finds the biggest contributor to the most-watched repository of
/// `query.organization`.
pub async fn find_biggest_contributor<F>(
    fetcher: &F,
    query: &ContributorQuery,
) -> GitHubClientResult<ContributorReport>
where
    F: Fetch + ?Sized,
{
    let mut stage = Stage::Start;
    let result = run(fetcher, query, &mut stage).await;
    if let Err(e) = &result {
        debug!("lookup for {} stopped after {:?}: {}", query.organization, stage, e);
    }
    result
}

async fn run<F>(
    fetcher: &F,
    query: &ContributorQuery,
    stage: &mut Stage,
) -> GitHubClientResult<ContributorReport>
where
    F: Fetch + ?Sized,
{
    let api_root = fetch_json::<ApiRoot, _>(fetcher, &query.api_url).await?;
    advance(stage, Stage::DiscoveryFetched);

    let organization_url = api_root.organization_url_for(&query.organization);
    let organization = fetch_json::<Organization, _>(fetcher, &organization_url).await?;
    advance(stage, Stage::OrgInfoFetched);

    let repos = fetch_json_list::<Repo, _>(fetcher, &organization.repos_url, query.pages).await?;
    advance(stage, Stage::ReposFetched);

    let repo = max_by(repos, |r| r.watchers_count).map_err(|e| GitHubClientError::NoCandidates {
        what: "repositories",
        source: e,
    })?;
    info!("most watched repository is {} ({} watchers)", repo.name, repo.watchers_count);
    advance(stage, Stage::MostWatchedSelected);

    let contributors =
        fetch_json_list::<Contributor, _>(fetcher, &repo.contributors_url, query.pages).await?;
    advance(stage, Stage::ContributorsFetched);

    let contributor =
        max_by(contributors, |c| c.contributions).map_err(|e| GitHubClientError::NoCandidates {
            what: "contributors",
            source: e,
        })?;
    info!("top contributor has {} contributions", contributor.contributions);
    advance(stage, Stage::TopContributorSelected);

    let user = fetch_json::<User, _>(fetcher, &contributor.url).await?;
    advance(stage, Stage::UserProfileFetched);

    Ok(ContributorReport {
        repo,
        contributor,
        user,
    })
}

fn advance(stage: &mut Stage, next: Stage) {
    debug!("{:?} -> {:?}", stage, next);
    *stage = next;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmptyInputError;
    use crate::fetch::Page;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use rstest::rstest;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const ROOT: &str = "https://x";
    const ORG: &str = "https://x/orgs/golang";
    const REPOS: &str = "https://x/orgs/golang/repos";
    const CONTRIBUTORS: &str = "https://x/repos/golang/b/contributors";
    const USER: &str = "https://x/users/rsc";

    enum Reply {
        Body(&'static str),
        Unreachable,
    }

    /// In-memory transport. Every requested URL is recorded so tests can
    /// check where a lookup stopped.
    #[derive(Default)]
    struct ScriptedFetch {
        replies: HashMap<&'static str, Reply>,
        requested: Mutex<Vec<String>>,
    }

    impl ScriptedFetch {
        fn happy_path() -> Self {
            let mut replies = HashMap::new();
            replies.insert(ROOT, Reply::Body(r#"{"organization_url":"https://x/orgs/{org}"}"#));
            replies.insert(ORG, Reply::Body(r#"{"repos_url":"https://x/orgs/golang/repos"}"#));
            replies.insert(
                REPOS,
                Reply::Body(
                    r#"[
                        {"name":"a","contributors_url":"https://x/repos/golang/a/contributors","watchers_count":3},
                        {"name":"b","contributors_url":"https://x/repos/golang/b/contributors","watchers_count":7},
                        {"name":"c","contributors_url":"https://x/repos/golang/c/contributors","watchers_count":7}
                    ]"#,
                ),
            );
            replies.insert(
                CONTRIBUTORS,
                Reply::Body(
                    r#"[
                        {"contributions":10,"url":"https://x/users/gri"},
                        {"contributions":40,"url":"https://x/users/rsc"},
                        {"contributions":40,"url":"https://x/users/ianlancetaylor"}
                    ]"#,
                ),
            );
            replies.insert(USER, Reply::Body(r#"{"name":"Russ Cox","login":"rsc"}"#));
            Self {
                replies,
                ..Default::default()
            }
        }

        fn replying(mut self, url: &'static str, reply: Reply) -> Self {
            self.replies.insert(url, reply);
            self
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetch for ScriptedFetch {
        async fn fetch_page(&self, url: &str) -> GitHubClientResult<Page> {
            self.requested.lock().unwrap().push(url.to_string());
            match self.replies.get(url) {
                Some(Reply::Body(body)) => Ok(Page::new(*body)),
                Some(Reply::Unreachable) | None => Err(GitHubClientError::Fetch {
                    url: url.to_string(),
                    source: anyhow!("connection reset by peer"),
                }),
            }
        }
    }

    fn query() -> ContributorQuery {
        ContributorQuery {
            api_url: ROOT.to_string(),
            ..ContributorQuery::new("golang")
        }
    }

    #[tokio::test]
    async fn finds_top_contributor_of_most_watched_repo() {
        let fetcher = ScriptedFetch::happy_path();

        let report = find_biggest_contributor(&fetcher, &query()).await.unwrap();

        assert_eq!(report.repo.name, "b");
        assert_eq!(report.contributor.url, USER);
        assert_eq!(
            report.user,
            User {
                name: "Russ Cox".to_string(),
                login: "rsc".to_string(),
            }
        );
        assert_eq!(fetcher.requested(), vec![ROOT, ORG, REPOS, CONTRIBUTORS, USER]);
    }

    #[rstest]
    #[case(ROOT, 1)]
    #[case(ORG, 2)]
    #[case(REPOS, 3)]
    #[case(CONTRIBUTORS, 4)]
    #[case(USER, 5)]
    #[tokio::test]
    async fn transport_failure_halts_lookup(#[case] failing: &'static str, #[case] calls: usize) {
        let fetcher = ScriptedFetch::happy_path().replying(failing, Reply::Unreachable);

        let err = find_biggest_contributor(&fetcher, &query()).await.unwrap_err();

        assert!(matches!(err, GitHubClientError::Fetch { ref url, .. } if url == failing));
        assert_eq!(
            err.to_string(),
            format!("error getting url ({failing}): connection reset by peer")
        );
        assert_eq!(fetcher.requested().len(), calls);
        assert_eq!(fetcher.requested().last().map(String::as_str), Some(failing));
    }

    #[tokio::test]
    async fn malformed_body_halts_lookup() {
        let fetcher = ScriptedFetch::happy_path().replying(ORG, Reply::Body("{\"repos_url\":"));

        let err = find_biggest_contributor(&fetcher, &query()).await.unwrap_err();

        assert!(matches!(err, GitHubClientError::Decode { type_name, .. } if type_name.ends_with("Organization")));
        assert_eq!(fetcher.requested(), vec![ROOT, ORG]);
    }

    #[tokio::test]
    async fn wrong_shape_halts_lookup() {
        let fetcher = ScriptedFetch::happy_path().replying(REPOS, Reply::Body(r#"{"message":"Not Found"}"#));

        let err = find_biggest_contributor(&fetcher, &query()).await.unwrap_err();

        assert!(matches!(err, GitHubClientError::Decode { .. }));
        assert_eq!(fetcher.requested(), vec![ROOT, ORG, REPOS]);
    }

    #[tokio::test]
    async fn organization_without_repositories_fails() {
        let fetcher = ScriptedFetch::happy_path().replying(REPOS, Reply::Body("[]"));

        let err = find_biggest_contributor(&fetcher, &query()).await.unwrap_err();

        assert!(matches!(
            err,
            GitHubClientError::NoCandidates {
                what: "repositories",
                source: EmptyInputError
            }
        ));
        assert_eq!(fetcher.requested().len(), 3);
    }

    #[tokio::test]
    async fn repository_without_contributors_fails() {
        let fetcher = ScriptedFetch::happy_path().replying(CONTRIBUTORS, Reply::Body("[]"));

        let err = find_biggest_contributor(&fetcher, &query()).await.unwrap_err();

        assert_eq!(err.to_string(), "no contributors to choose from: input is empty");
        assert_eq!(fetcher.requested().len(), 4);
    }

    #[tokio::test]
    async fn organization_name_fills_discovered_template() {
        let fetcher = ScriptedFetch::happy_path();
        let query = ContributorQuery {
            api_url: ROOT.to_string(),
            ..ContributorQuery::new("rust-lang")
        };

        let err = find_biggest_contributor(&fetcher, &query).await.unwrap_err();

        assert!(matches!(err, GitHubClientError::Fetch { ref url, .. } if url == "https://x/orgs/rust-lang"));
    }

    #[test]
    fn stages_are_ordered() {
        assert!(Stage::Start < Stage::DiscoveryFetched);
        assert!(Stage::TopContributorSelected < Stage::UserProfileFetched);
    }
}
