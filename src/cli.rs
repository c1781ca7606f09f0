use cargo_audit_review::application::dto::OutputFormat;
use clap::Parser;

/// Name cargo passes as the first argument when run as `cargo audit-review`
const CARGO_SUBCOMMAND: &str = "audit-review";

/// Turn `cargo audit` findings into a pull request review
#[derive(Parser, Debug)]
#[command(name = "cargo-audit-review")]
#[command(version)]
#[command(
    about = "Turn cargo audit findings into a GitHub pull request review",
    long_about = "Runs `cargo audit`, traces every vulnerable crate back to the direct \
                  dependency that pulls it in, and renders a review with one annotation \
                  per direct dependency in Cargo.toml."
)]
pub struct Args {
    /// Path to the package directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Output format: markdown or json [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file path (defaults to cargo-audit-review.config.yml in the package directory)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Read a saved `cargo audit --json` report instead of running cargo audit
    #[arg(long, value_name = "FILE")]
    pub audit_json: Option<String>,

    /// Read saved `cargo metadata --format-version=1` output instead of running cargo metadata
    #[arg(long, value_name = "FILE")]
    pub metadata_json: Option<String>,

    /// Extra flags for cargo audit, e.g. "--no-fetch --stale"
    #[arg(long, value_name = "FLAGS", allow_hyphen_values = true)]
    pub audit_args: Option<String>,

    /// Ignore an advisory id. Can be specified multiple times
    #[arg(short, long = "ignore", value_name = "ADVISORY_ID")]
    pub ignore: Vec<String>,

    /// Base URL advisory ids are linked under
    #[arg(long, value_name = "URL")]
    pub advisory_url: Option<String>,

    /// Manifest path annotations are attached to, relative to the repository root
    #[arg(long, value_name = "PATH")]
    pub manifest_file: Option<String>,

    /// Submit the review to the current GitHub pull request
    #[arg(long)]
    pub publish: bool,

    /// GitHub token used with --publish (defaults to GITHUB_TOKEN)
    #[arg(long, value_name = "TOKEN")]
    pub github_token: Option<String>,

    /// Exit with code 1 when the review requests changes
    #[arg(long)]
    pub fail_on_vulnerabilities: bool,

    /// Only print errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args()))
    }
}

/// Drops the subcommand name cargo inserts after the binary name.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut args: Vec<String> = args.into_iter().collect();
    if args.get(1).map(String::as_str) == Some(CARGO_SUBCOMMAND) {
        args.remove(1);
    }
    args
}
