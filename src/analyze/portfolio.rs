use crate::extract::metrics::PortfolioMetrics;
use crate::types::scoring::{finalize, Score};

pub fn portfolio_score(metrics: &PortfolioMetrics) -> Score {
    let mut score: Score = 0.0;

    // breadth
    if metrics.repo_count >= 12 {
        score += 2.0;
    } else if metrics.repo_count >= 8 {
        score += 1.5;
    } else if metrics.repo_count >= 5 {
        score += 1.0;
    }

    if metrics.active30 >= 2 {
        score += 2.0;
    } else if metrics.active90 >= 3 {
        score += 1.5;
    } else if metrics.active90 >= 1 {
        score += 1.0;
    }

    let doc_ratio = metrics.doc_ratio();
    if doc_ratio >= 0.7 {
        score += 2.0;
    } else if doc_ratio >= 0.5 {
        score += 1.5;
    } else if doc_ratio >= 0.3 {
        score += 1.0;
    }

    let language_count = metrics.language_count();
    if language_count >= 5 {
        score += 2.0;
    } else if language_count >= 3 {
        score += 1.5;
    } else if language_count >= 2 {
        score += 1.0;
    }

    let original_ratio = metrics.original_ratio();
    if original_ratio >= 0.75 {
        score += 2.0;
    } else if original_ratio >= 0.55 {
        score += 1.5;
    } else if original_ratio >= 0.35 {
        score += 1.0;
    }

    // polish
    if metrics.homepage_links > 0 {
        score += 0.5;
    }
    if metrics.has_pages > 0 {
        score += 0.5;
    }
    if metrics.has_license > 0 {
        score += 0.25;
    }

    finalize(score)
}
