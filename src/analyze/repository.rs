use crate::extract::metrics::RepositoryMetrics;
use crate::types::scoring::{finalize, Score};

pub const STALE_DAYS: f64 = 180.0;
pub const LARGE_SIZE_KB: u64 = 300;
pub const MODERATE_SIZE_KB: u64 = 120;
pub const TINY_SIZE_KB: u64 = 60;

pub fn repository_score(metrics: &RepositoryMetrics) -> Score {
    let mut score: Score = 0.0;

    // ownership
    if metrics.is_fork {
        score -= 1.0;
    } else {
        score += 2.0;
    }

    if metrics.days_inactive <= 30.0 {
        score += 2.0;
    } else if metrics.days_inactive <= 90.0 {
        score += 1.5;
    } else if metrics.days_inactive <= STALE_DAYS {
        score += 1.0;
    }

    if metrics.has_description {
        score += 1.5;
    }
    if metrics.has_homepage {
        score += 1.0;
    }
    if metrics.has_license {
        score += 0.5;
    }
    if metrics.has_topics {
        score += 0.5;
    }

    // community
    if metrics.stars > 0 {
        score += 1.0;
    }
    if metrics.forks > 0 {
        score += 0.5;
    }

    if metrics.size_kb >= LARGE_SIZE_KB {
        score += 1.0;
    } else if metrics.size_kb >= MODERATE_SIZE_KB {
        score += 0.5;
    }

    finalize(score)
}
