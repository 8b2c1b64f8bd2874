use crate::types::repository::{ReadmeSignals, RepositoryRecord};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub const ACTIVE_RECENT_DAYS: f64 = 30.0;
pub const ACTIVE_QUARTER_DAYS: f64 = 90.0;
pub const PORTFOLIO_TOP_LANGUAGES: usize = 5;
pub const SUMMARY_TOP_LANGUAGES: usize = 10;

/// Reported when the portfolio has no update timestamps to take a median of.
pub const MEDIAN_UPDATED_FALLBACK_DAYS: f64 = 999.0;

/// Fractional days between `timestamp` and `now`. Negative for timestamps in the future.
pub fn days_since(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - timestamp).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Upper median: sorts ascending and takes index `len / 2` without averaging.
pub fn upper_median<T: Copy + PartialOrd>(values: &mut [T]) -> Option<T> {
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    values.get(values.len() / 2).copied()
}

/// Language occurrence counts kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTally {
    entries: Vec<(String, usize)>,
}

impl LanguageTally {
    pub fn record(&mut self, language: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == language) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((language.to_string(), 1)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Most frequent languages first. Ties keep first-seen order (stable sort).
    pub fn top(&self, limit: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);
        ranked
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryMetrics {
    pub name: String,
    pub days_inactive: f64,
    pub has_description: bool,
    pub has_homepage: bool,
    pub has_license: bool,
    pub has_topics: bool,
    pub is_fork: bool,
    pub stars: u64,
    pub forks: u64,
    pub issues: u64,
    pub size_kb: u64,
    pub language: Option<String>,
    pub has_demo_or_visuals: bool,
}

pub fn repository_metrics(
    repo: &RepositoryRecord,
    readme: ReadmeSignals,
    now: DateTime<Utc>,
) -> RepositoryMetrics {
    let has_homepage = repo.has_homepage();
    RepositoryMetrics {
        name: repo.name.clone(),
        days_inactive: days_since(repo.updated_at, now),
        has_description: repo.has_description(),
        has_homepage,
        has_license: repo.has_license(),
        has_topics: repo.has_topics(),
        is_fork: repo.fork,
        stars: repo.stargazers_count,
        forks: repo.forks_count,
        issues: repo.open_issues_count,
        size_kb: repo.size,
        language: repo.primary_language().map(str::to_string),
        has_demo_or_visuals: has_homepage || readme.has_links || readme.has_images,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioMetrics {
    pub repo_count: usize,
    pub documented: usize,
    pub homepage_links: usize,
    pub has_pages: usize,
    pub has_license: usize,
    pub has_topics: usize,
    pub forks: usize,
    pub originals: usize,
    pub active30: usize,
    pub active90: usize,
    pub stars_total: u64,
    pub forks_total: u64,
    pub issues_total: u64,
    pub languages: LanguageTally,
    pub median_updated_days: f64,
    pub median_size_kb: u64,
}

impl PortfolioMetrics {
    fn ratio_base(&self) -> f64 {
        self.repo_count.max(1) as f64
    }

    pub fn doc_ratio(&self) -> f64 {
        self.documented as f64 / self.ratio_base()
    }

    pub fn original_ratio(&self) -> f64 {
        self.originals as f64 / self.ratio_base()
    }

    pub fn language_count(&self) -> usize {
        self.languages.len()
    }

    pub fn top_languages(&self, limit: usize) -> Vec<(&str, usize)> {
        self.languages.top(limit)
    }
}

pub fn portfolio_metrics(repos: &[RepositoryRecord], now: DateTime<Utc>) -> PortfolioMetrics {
    let mut metrics = PortfolioMetrics {
        repo_count: repos.len(),
        documented: 0,
        homepage_links: 0,
        has_pages: 0,
        has_license: 0,
        has_topics: 0,
        forks: 0,
        originals: 0,
        active30: 0,
        active90: 0,
        stars_total: 0,
        forks_total: 0,
        issues_total: 0,
        languages: LanguageTally::default(),
        median_updated_days: MEDIAN_UPDATED_FALLBACK_DAYS,
        median_size_kb: 0,
    };
    let mut updated_days = Vec::with_capacity(repos.len());
    let mut sizes = Vec::with_capacity(repos.len());

    for repo in repos {
        if let Some(language) = repo.primary_language() {
            metrics.languages.record(language);
        }
        if repo.has_description() {
            metrics.documented += 1;
        }
        if repo.has_homepage() {
            metrics.homepage_links += 1;
        }
        if repo.has_pages {
            metrics.has_pages += 1;
        }
        if repo.has_license() {
            metrics.has_license += 1;
        }
        if repo.has_topics() {
            metrics.has_topics += 1;
        }
        if repo.is_original() {
            metrics.originals += 1;
        } else {
            metrics.forks += 1;
        }

        let days = days_since(repo.updated_at, now);
        if days <= ACTIVE_RECENT_DAYS {
            metrics.active30 += 1;
        }
        if days <= ACTIVE_QUARTER_DAYS {
            metrics.active90 += 1;
        }
        updated_days.push(days);

        metrics.stars_total += repo.stargazers_count;
        metrics.forks_total += repo.forks_count;
        metrics.issues_total += repo.open_issues_count;
        sizes.push(repo.size);
    }

    if let Some(median) = upper_median(&mut updated_days) {
        metrics.median_updated_days = median;
    }
    if let Some(median) = upper_median(&mut sizes) {
        metrics.median_size_kb = median;
    }
    metrics
}
