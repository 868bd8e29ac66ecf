use clap::Parser;
use contrib_lib::DEFAULT_API_URL;

#[derive(Debug, Parser)]
#[clap(about = "Finds the biggest contributor to an organization's most-watched repository")]
pub struct Args {
    #[clap(
        short = 'o',
        long = "org",
        help = "GitHub organization",
        env = "CONTRIB_ORG",
        default_value = "golang"
    )]
    pub organization: String,

    #[clap(
        short = 'u',
        long = "api-url",
        help = "GitHub REST API root",
        env = "CONTRIB_API_URL",
        default_value = DEFAULT_API_URL
    )]
    pub api_url: String,

    #[clap(
        short = 't',
        long = "token",
        help = "GitHub REST API token",
        env = "CONTRIB_GITHUB_TOKEN"
    )]
    pub github_token: Option<String>,

    #[clap(
        long = "timeout",
        help = "Per-request timeout in seconds",
        env = "CONTRIB_TIMEOUT_SECS",
        default_value = "30"
    )]
    pub timeout_secs: u64,

    #[clap(
        short = 'a',
        long = "all-pages",
        help = "Follow pagination for repository and contributor lists",
        default_value = "false"
    )]
    pub all_pages: bool,

    #[clap(short = 'v', long = "verbose", help = "Debug logging", default_value = "false")]
    pub verbose: bool,
}
