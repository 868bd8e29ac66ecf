mod decode;
mod error;
mod fetch;
mod github_client;
mod link_urls;
mod logging_middleware;
mod object_model;
mod pipeline;
mod reduce;
mod result;

pub use self::decode::{decode, fetch_json, fetch_json_list, Pages};
pub use self::error::{EmptyInputError, GitHubClientError};
pub use self::fetch::{Fetch, Page};
pub use self::github_client::{ClientOptions, GitHubClient};
pub use self::logging_middleware::LoggingMiddleware;
pub use self::object_model::{
    expand_org_template, ApiErrorBody, ApiRoot, Contributor, Organization, Repo, User,
    ORG_PLACEHOLDER,
};
pub use self::pipeline::{
    find_biggest_contributor, ContributorQuery, ContributorReport, Stage, DEFAULT_API_URL,
};
pub use self::reduce::max_by;
pub use self::result::GitHubClientResult;
