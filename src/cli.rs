use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Heuristic portfolio and repository quality scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding folio.toml and .folio/local.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a user's whole repository list
    Portfolio(PortfolioCommand),
    /// Score a single repository
    Repo(RepoCommand),
    /// Print the signals detected in a README file
    Readme(ReadmeCommand),
}

#[derive(Args)]
pub struct ReportOptions {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Reference time (RFC 3339) used for day-difference calculations
    #[arg(long)]
    pub now: Option<String>,

    /// Exit with code 1 when the score is below this value
    #[arg(long)]
    pub min_score: Option<f64>,
}

#[derive(Args)]
pub struct PortfolioCommand {
    /// JSON array of repository records
    #[arg(long, required_unless_present = "user", conflicts_with = "user")]
    pub input: Option<PathBuf>,

    /// Fetch the repository list for this user
    #[arg(long, required_unless_present = "input", conflicts_with = "input")]
    pub user: Option<String>,

    #[command(flatten)]
    pub options: ReportOptions,
}

#[derive(Args)]
pub struct RepoCommand {
    /// JSON repository record
    #[arg(long, required_unless_present = "github", conflicts_with = "github")]
    pub input: Option<PathBuf>,

    /// Fetch the repository and its README, as OWNER/NAME
    #[arg(long, required_unless_present = "input", conflicts_with = "input")]
    pub github: Option<String>,

    /// Local README used for demo/visual signals
    #[arg(long, conflicts_with = "github")]
    pub readme: Option<PathBuf>,

    #[command(flatten)]
    pub options: ReportOptions,
}

#[derive(Args)]
pub struct ReadmeCommand {
    pub path: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
