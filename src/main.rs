mod cli;
mod config;

use cargo_audit_review::adapters::outbound::console::StderrProgressReporter;
use cargo_audit_review::adapters::outbound::filesystem::{
    FileSystemReader, JsonAuditFile, JsonMetadataFile,
};
use cargo_audit_review::adapters::outbound::network::{GitHubContext, GitHubReviewPublisher};
use cargo_audit_review::adapters::outbound::process::CargoCommandRunner;
use cargo_audit_review::application::dto::{OutputFormat, ReviewRequest};
use cargo_audit_review::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use cargo_audit_review::application::use_cases::ReviewAuditUseCase;
use cargo_audit_review::ports::outbound::{
    AuditSource, MetadataSource, ProgressReporter, ReviewPublisher,
};
use cargo_audit_review::review::domain::{Review, Verdict};
use cargo_audit_review::review::services::{DEFAULT_ADVISORY_BASE_URL, DEFAULT_MANIFEST_FILE};
use cargo_audit_review::shared::error::{ExitCode, ReviewError};
use cargo_audit_review::shared::flags::parse_command_flags;
use cargo_audit_review::shared::Result;
use cli::Args;
use config::ConfigFile;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

/// Validation problems are argument errors; everything else is an application error.
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ReviewError>() {
        Some(ReviewError::Validation { .. }) | Some(ReviewError::InvalidProjectPath { .. }) => {
            ExitCode::InvalidArguments
        }
        _ => ExitCode::ApplicationError,
    }
}

/// Effective options after merging the config file under the CLI
#[derive(Debug, Clone, PartialEq, Eq)]
struct ReviewSettings {
    format: OutputFormat,
    fail_on_vulnerabilities: bool,
    publish: bool,
    audit_args: Vec<String>,
    ignore_advisories: Vec<String>,
    advisory_base_url: String,
    manifest_file: String,
}

fn resolve_settings(args: &Args, config: Option<&ConfigFile>) -> Result<ReviewSettings> {
    let format = match (args.format, config.and_then(|c| c.format.as_deref())) {
        (Some(format), _) => format,
        (None, Some(format)) => OutputFormat::from_str(format)
            .map_err(|message| ReviewError::Validation { message })?,
        (None, None) => OutputFormat::default(),
    };

    let audit_args = args
        .audit_args
        .as_deref()
        .or_else(|| config.and_then(|c| c.audit_args.as_deref()))
        .map(parse_command_flags)
        .unwrap_or_default();

    let mut ignore_advisories = config.map(ConfigFile::ignored_advisory_ids).unwrap_or_default();
    for id in &args.ignore {
        let id = id.trim();
        if id.is_empty() {
            return Err(ReviewError::Validation {
                message: "--ignore requires a non-empty advisory id".to_string(),
            }
            .into());
        }
        if !ignore_advisories.iter().any(|known| known == id) {
            ignore_advisories.push(id.to_string());
        }
    }

    let advisory_base_url = args
        .advisory_url
        .clone()
        .or_else(|| config.and_then(|c| c.advisory_base_url.clone()))
        .unwrap_or_else(|| DEFAULT_ADVISORY_BASE_URL.to_string());
    if !(advisory_base_url.starts_with("https://") || advisory_base_url.starts_with("http://")) {
        return Err(ReviewError::Validation {
            message: format!(
                "--advisory-url must be an http(s) URL, got '{}'",
                advisory_base_url
            ),
        }
        .into());
    }

    let manifest_file = args
        .manifest_file
        .clone()
        .or_else(|| config.and_then(|c| c.manifest_file.clone()))
        .unwrap_or_else(|| DEFAULT_MANIFEST_FILE.to_string());

    Ok(ReviewSettings {
        format,
        fail_on_vulnerabilities: args.fail_on_vulnerabilities
            || config.and_then(|c| c.fail_on_vulnerabilities).unwrap_or(false),
        publish: args.publish || config.and_then(|c| c.publish).unwrap_or(false),
        audit_args,
        ignore_advisories,
        advisory_base_url,
        manifest_file,
    })
}

async fn run() -> Result<ExitCode> {
    let args = Args::parse_args();

    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_path = PathBuf::from(project_dir);
    validate_project_path(&project_path)?;

    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(Path::new(path))?),
        None => {
            let discovered = config::discover_config(&project_path)?;
            if discovered.is_some() {
                progress_reporter.report(&format!(
                    "📄 Auto-discovered config file: {}",
                    project_path.join(config::CONFIG_FILENAME).display()
                ));
            }
            discovered
        }
    };
    let settings = resolve_settings(&args, config.as_ref())?;

    // Create adapters (Dependency Injection)
    let audit_source: Box<dyn AuditSource> = match args.audit_json.as_deref() {
        Some(path) => Box::new(JsonAuditFile::new(PathBuf::from(path))),
        None => Box::new(CargoCommandRunner::new()),
    };
    let metadata_source: Box<dyn MetadataSource> = match args.metadata_json.as_deref() {
        Some(path) => Box::new(JsonMetadataFile::new(PathBuf::from(path))),
        None => Box::new(CargoCommandRunner::new()),
    };

    let use_case = ReviewAuditUseCase::new(
        audit_source,
        metadata_source,
        FileSystemReader::new(),
        FileSystemReader::new(),
        &progress_reporter,
    );

    let request = ReviewRequest {
        project_path,
        audit_args: settings.audit_args.clone(),
        ignore_advisories: settings.ignore_advisories.clone(),
        advisory_base_url: settings.advisory_base_url.clone(),
        manifest_file: settings.manifest_file.clone(),
    };
    let response = use_case.execute(request).await?;

    progress_reporter.report(FormatterFactory::progress_message(settings.format));
    let formatted = FormatterFactory::create(settings.format).format(&response.review)?;
    let presenter = PresenterFactory::create(PresenterType::from(args.output.map(PathBuf::from)));
    presenter.present(&formatted)?;

    report_verdict(response.review.verdict);

    if settings.publish {
        publish_review(&response.review, args.github_token, &progress_reporter).await?;
    }

    if response.requests_changes() && settings.fail_on_vulnerabilities {
        Ok(ExitCode::VulnerabilitiesDetected)
    } else {
        Ok(ExitCode::Success)
    }
}

fn report_verdict(verdict: Verdict) {
    let line = format!("Review verdict: {}", verdict);
    let colored = std::io::stderr().is_terminal();
    match verdict {
        Verdict::Approve if colored => eprintln!("✔ {}", line.green().bold()),
        Verdict::ChangesRequested if colored => eprintln!("✖ {}", line.red().bold()),
        Verdict::Approve => eprintln!("✔ {}", line),
        Verdict::ChangesRequested => eprintln!("✖ {}", line),
    }
}

async fn publish_review(
    review: &Review,
    token: Option<String>,
    progress_reporter: &impl ProgressReporter,
) -> Result<()> {
    let context = GitHubContext::from_env(token)?;
    let Some(pull_request) = context.pull_request else {
        progress_reporter.report_error(
            "⚠️  Warning: The triggering event is not a pull request. Skipping publishing.",
        );
        return Ok(());
    };

    let publisher = GitHubReviewPublisher::new(&context)?;
    progress_reporter.report(&format!(
        "📤 Publishing review to {}/{}#{}...",
        context.owner, context.repository, pull_request
    ));

    let published = publisher.publish(review).await?;
    let location = published
        .html_url
        .map(|url| format!(": {}", url))
        .unwrap_or_default();
    progress_reporter.report_completion(&format!(
        "✅ Review {} published{}",
        published.id, location
    ));
    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ReviewError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| ReviewError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(ReviewError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ReviewError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
