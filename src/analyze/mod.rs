pub mod portfolio;
pub mod repository;

use crate::extract::metrics::{portfolio_metrics, repository_metrics};
use crate::narrative;
use crate::types::report::{Maturity, Report};
use crate::types::repository::{ReadmeSignals, RepositoryRecord};
use chrono::{DateTime, Utc};

pub fn analyze_portfolio(repos: &[RepositoryRecord], now: DateTime<Utc>) -> Report {
    let metrics = portfolio_metrics(repos, now);
    let score = portfolio::portfolio_score(&metrics);
    tracing::debug!(
        repos = metrics.repo_count,
        languages = metrics.language_count(),
        score,
        "portfolio scored"
    );

    Report {
        score,
        strengths: narrative::portfolio::strengths(&metrics),
        weaknesses: narrative::portfolio::weaknesses(&metrics),
        improvements: narrative::portfolio::improvements(),
        tech_summary: narrative::portfolio::tech_summary(&metrics),
    }
}

pub fn analyze_repository(
    repo: &RepositoryRecord,
    readme: ReadmeSignals,
    now: DateTime<Utc>,
) -> Report {
    let metrics = repository_metrics(repo, readme, now);
    let score = repository::repository_score(&metrics);
    let maturity = Maturity::from_score(score);
    tracing::debug!(repo = %metrics.name, score, %maturity, "repository scored");

    Report {
        score,
        strengths: narrative::repository::strengths(&metrics, score, maturity),
        weaknesses: narrative::repository::weaknesses(&metrics),
        improvements: narrative::repository::improvements(&metrics),
        tech_summary: narrative::repository::tech_summary(&metrics),
    }
}
