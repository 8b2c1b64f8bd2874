mod analyze;
mod cli;
mod config;
mod error;
mod extract;
mod github;
mod narrative;
mod report;
mod types;

use crate::error::FolioError;
use crate::types::config::{FolioConfig, ReportFormatSetting};
use crate::types::profile::ProfileOverview;
use crate::types::report::Report;
use chrono::{DateTime, Utc};
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_THRESHOLD: i32 = 1;
    pub const UNAVAILABLE: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

const LOG_ENV: &str = "FOLIO_LOG";

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_now(raw: Option<&str>) -> Result<DateTime<Utc>, FolioError> {
    match raw {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .map_err(|e| FolioError::InvalidTimestamp(format!("{raw}: {e}"))),
        None => Ok(Utc::now()),
    }
}

fn output_format(
    requested: Option<cli::ReportFormat>,
    config: &FolioConfig,
) -> report::OutputFormat {
    match requested {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match config.report_format() {
            Some(ReportFormatSetting::Json) => report::OutputFormat::Json,
            Some(ReportFormatSetting::Md) | None => report::OutputFormat::Md,
        },
    }
}

fn emit(
    title: &str,
    analysis: &Report,
    overview: Option<&ProfileOverview>,
    options: &cli::ReportOptions,
    config: &FolioConfig,
) -> Result<i32, FolioError> {
    let format = output_format(options.format, config);
    let rendered = report::render(title, analysis, overview, format)?;
    println!("{rendered}");

    match options.min_score {
        Some(min_score) if analysis.score < min_score => {
            eprintln!(
                "warning: score {} is below the minimum of {}",
                analysis.score, min_score
            );
            Ok(exit_code::BELOW_THRESHOLD)
        }
        _ => Ok(exit_code::SUCCESS),
    }
}

fn run() -> Result<i32, FolioError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "folio starting");

    let config = config::load_config(&cli.config_dir)?.unwrap_or_default();

    match cli.command {
        cli::Commands::Portfolio(cmd) => {
            let now = parse_now(cmd.options.now.as_deref())?;
            let (repos, overview) = match (&cmd.input, &cmd.user) {
                (Some(path), _) => (extract::input::load_repositories(path)?, None),
                (None, Some(user)) => {
                    let client = github::GithubClient::new(config.github_settings())?;
                    let profile = client.profile(user)?;
                    let repos = client.list_repositories(user)?;
                    let push_activity = client.push_activity(user, now);
                    (
                        repos,
                        Some(ProfileOverview {
                            profile,
                            push_activity,
                        }),
                    )
                }
                (None, None) => {
                    return Err(FolioError::InputParse(
                        "either --input or --user is required".to_string(),
                    ))
                }
            };
            if repos.is_empty() {
                return Err(FolioError::EmptyPortfolio);
            }

            let analysis = analyze::analyze_portfolio(&repos, now);
            emit(
                "Portfolio Analysis Report",
                &analysis,
                overview.as_ref(),
                &cmd.options,
                &config,
            )
        }
        cli::Commands::Repo(cmd) => {
            let now = parse_now(cmd.options.now.as_deref())?;
            let (repo, signals) = match (&cmd.input, &cmd.github) {
                (Some(path), _) => {
                    let repo = extract::input::load_repository(path)?;
                    let signals = cmd
                        .readme
                        .as_deref()
                        .map(extract::input::load_readme_signals)
                        .unwrap_or_default();
                    (repo, signals)
                }
                (None, Some(slug)) => {
                    let (owner, name) = github::parse_slug(slug).ok_or_else(|| {
                        FolioError::InputParse(format!("expected OWNER/NAME, got {slug}"))
                    })?;
                    let client = github::GithubClient::new(config.github_settings())?;
                    let repo = client.repository(owner, name)?;
                    let readme_owner = match repo.owner.login.as_str() {
                        "" => owner,
                        login => login,
                    };
                    let signals = client.readme_signals(readme_owner, &repo.name);
                    (repo, signals)
                }
                (None, None) => {
                    return Err(FolioError::InputParse(
                        "either --input or --github is required".to_string(),
                    ))
                }
            };

            let analysis = analyze::analyze_repository(&repo, signals, now);
            let title = format!("Repository Analysis: {}", repo.name);
            emit(&title, &analysis, None, &cmd.options, &config)
        }
        cli::Commands::Readme(cmd) => {
            if !cmd.path.exists() {
                return Err(FolioError::InputNotFound(cmd.path.display().to_string()));
            }
            let text = std::fs::read_to_string(&cmd.path)?;
            let signals = extract::readme::detect(&text);
            println!("{}", serde_json::to_string_pretty(&signals)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_unavailable() {
                exit_code::UNAVAILABLE
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
