use super::{pct, round_days};
use crate::extract::metrics::{PortfolioMetrics, PORTFOLIO_TOP_LANGUAGES, SUMMARY_TOP_LANGUAGES};

const WEAK_DOC_RATIO: f64 = 0.6;

const ROADMAP: [&str; 5] = [
    "Create 1 flagship project: include a crisp README (problem → solution → tech), screenshots, and a live demo link.",
    "Standardize repos: add descriptions everywhere, consistent naming, and a short feature list + setup steps.",
    "Add portfolio polish signals: license on major repos, topics/tags, and a simple roadmap (issues or milestones).",
    "Pin 4–6 best repos on GitHub and align them with the role you want (frontend, backend, full-stack).",
    "Increase credibility: meaningful commit history, small iterative improvements, and short demo videos for top projects.",
];

pub fn strengths(metrics: &PortfolioMetrics) -> Vec<String> {
    let total = metrics.repo_count;
    let top = metrics
        .top_languages(PORTFOLIO_TOP_LANGUAGES)
        .into_iter()
        .map(|(language, count)| format!("{language} ({count})"))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        format!(
            "Repository volume: {total} public repo(s), which is a solid base for a portfolio."
        ),
        format!(
            "Ownership: {}/{} are original ({}).",
            metrics.originals,
            total,
            pct(metrics.originals, total)
        ),
        format!(
            "Activity: {} updated in last 30 days; {} updated in last 90 days. Median last update: ~{} day(s) ago.",
            metrics.active30,
            metrics.active90,
            round_days(metrics.median_updated_days)
        ),
        format!(
            "Tech coverage: {} language(s). Top: {}.",
            metrics.language_count(),
            top
        ),
    ]
}

pub fn weaknesses(metrics: &PortfolioMetrics) -> Vec<String> {
    let total = metrics.repo_count;
    let mut weaknesses = Vec::with_capacity(3);

    if metrics.doc_ratio() < WEAK_DOC_RATIO {
        weaknesses.push(format!(
            "Documentation signal is weak: only {}/{} repos have descriptions ({}).",
            metrics.documented,
            total,
            pct(metrics.documented, total)
        ));
    } else {
        weaknesses.push(
            "Documentation is decent, but READMEs and usage guides still matter for recruiter review (descriptions alone are not enough)."
                .to_string(),
        );
    }

    if metrics.homepage_links == 0 && metrics.has_pages == 0 {
        weaknesses.push(
            "Presentation is limited: no homepage links or GitHub Pages detected. Recruiters love demos."
                .to_string(),
        );
    } else {
        weaknesses.push(format!(
            "Some presentation exists: {} repo(s) have a homepage link, {} repo(s) have GitHub Pages enabled.",
            metrics.homepage_links, metrics.has_pages
        ));
    }

    if metrics.stars_total == 0 && metrics.forks_total == 0 {
        weaknesses.push(
            "Low external signal: stars/forks are near zero. That’s normal early on, but showcasing best projects helps."
                .to_string(),
        );
    } else {
        weaknesses.push(format!(
            "External signal: {} total star(s), {} total fork(s).",
            metrics.stars_total, metrics.forks_total
        ));
    }

    weaknesses
}

pub fn improvements() -> Vec<String> {
    ROADMAP.iter().map(|item| item.to_string()).collect()
}

pub fn tech_summary(metrics: &PortfolioMetrics) -> String {
    let total = metrics.repo_count;
    let languages = metrics
        .top_languages(SUMMARY_TOP_LANGUAGES)
        .into_iter()
        .map(|(language, count)| format!("{language} ({count}, {})", pct(count, total)))
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        "Languages: {languages}. Docs: {}/{total}. Demos: homepage links {}, GitHub Pages {}. License: {} repo(s). Median repo size: ~{} KB.",
        metrics.documented,
        metrics.homepage_links,
        metrics.has_pages,
        metrics.has_license,
        metrics.median_size_kb
    )
}
