mod args;

use crate::args::Args;
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use contrib_lib::{
    find_biggest_contributor, ClientOptions, ContributorQuery, ContributorReport, GitHubClient,
    GitHubClientResult, Pages,
};
use log::Level;
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let github = GitHubClient::new(ClientOptions {
        token: args.github_token,
        timeout: Some(Duration::from_secs(args.timeout_secs)),
        log_level: Level::Debug,
    })?;

    let query = ContributorQuery {
        api_url: args.api_url,
        organization: args.organization,
        pages: if args.all_pages { Pages::All } else { Pages::First },
    };

    let outcome = find_biggest_contributor(&github, &query).await;
    println!("{}", render(&outcome));

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn render(outcome: &GitHubClientResult<ContributorReport>) -> String {
    match outcome {
        Ok(report) => format!(
            "The largest contributor to {} is: {} ( {} )",
            report.repo.name.yellow(),
            report.user.name.yellow(),
            report.user.login
        ),
        Err(e) => format!("{} {}", "Error golang style:".red(), e),
    }
}
