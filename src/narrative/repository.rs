use super::round_days;
use crate::analyze::repository::{LARGE_SIZE_KB, MODERATE_SIZE_KB, STALE_DAYS, TINY_SIZE_KB};
use crate::extract::metrics::RepositoryMetrics;
use crate::types::report::Maturity;
use crate::types::scoring::Score;

pub const VISUAL_PROOF: &str =
    "Project includes visual proof (screenshots or live demo), improving clarity and presentation.";
pub const MISSING_DEMO: &str =
    "No demo or screenshots detected. Adding visuals helps reviewers quickly understand the project.";

pub fn strengths(metrics: &RepositoryMetrics, score: Score, maturity: Maturity) -> Vec<String> {
    let mut strengths = vec![format!(
        "Project maturity: {maturity} level (score {score}/10)."
    )];

    if !metrics.is_fork {
        strengths.push(
            "Original project, showing independent ownership and problem-solving.".to_string(),
        );
    }

    strengths.push(format!(
        "Last updated ~{} day(s) ago.",
        round_days(metrics.days_inactive)
    ));

    if metrics.has_description {
        strengths.push("Clear project description helps quick understanding.".to_string());
    }
    if metrics.has_homepage {
        strengths.push("Includes a live demo or homepage link.".to_string());
    }
    if metrics.stars > 0 || metrics.forks > 0 {
        strengths.push(format!(
            "Community engagement detected: {} star(s), {} fork(s).",
            metrics.stars, metrics.forks
        ));
    }

    if metrics.size_kb >= LARGE_SIZE_KB {
        strengths.push(format!(
            "Repository size (~{} KB) suggests a non-trivial implementation.",
            metrics.size_kb
        ));
    } else if metrics.size_kb >= MODERATE_SIZE_KB {
        strengths.push(format!(
            "Moderate repository size (~{} KB) indicating meaningful work.",
            metrics.size_kb
        ));
    }

    if metrics.has_demo_or_visuals {
        strengths.push(VISUAL_PROOF.to_string());
    }

    strengths
}

pub fn weaknesses(metrics: &RepositoryMetrics) -> Vec<String> {
    let mut weaknesses = Vec::new();

    if metrics.is_fork {
        weaknesses.push(
            "Forked repository — ownership impact depends on how much original work was added."
                .to_string(),
        );
    }
    if !metrics.has_description {
        weaknesses.push(
            "Missing description makes it harder for reviewers to quickly grasp the project."
                .to_string(),
        );
    }
    if !metrics.has_demo_or_visuals {
        weaknesses.push(MISSING_DEMO.to_string());
    }
    if !metrics.has_license {
        weaknesses.push(
            "No license specified, which reduces professionalism and reuse clarity.".to_string(),
        );
    }
    if !metrics.has_topics {
        weaknesses.push("No topics/tags set, reducing discoverability on GitHub.".to_string());
    }
    if metrics.days_inactive > STALE_DAYS {
        weaknesses.push(
            "Project has not been updated recently, which may signal abandonment.".to_string(),
        );
    }
    if metrics.size_kb < TINY_SIZE_KB {
        weaknesses.push(
            "Very small repository size may indicate experimental or incomplete work.".to_string(),
        );
    }

    weaknesses
}

pub fn improvements(metrics: &RepositoryMetrics) -> Vec<String> {
    let mut improvements = vec![
        "Ensure the README is well-structured: problem → solution → features → tech stack → setup → screenshots."
            .to_string(),
    ];

    if metrics.has_demo_or_visuals {
        improvements.push(
            "Improve presentation by refining screenshots, adding captions, or short demo GIFs/videos."
                .to_string(),
        );
    } else {
        improvements.push(
            "Add a demo (GitHub Pages, Vercel, Netlify) or screenshots/GIFs to visually showcase the project."
                .to_string(),
        );
    }

    if !metrics.has_topics {
        improvements.push(
            "Add GitHub topics/tags to improve discoverability and clarify the project’s domain."
                .to_string(),
        );
    }
    if !metrics.has_license {
        improvements.push(
            "Add an appropriate open-source license (MIT, Apache 2.0, etc.) to improve professionalism."
                .to_string(),
        );
    }
    if metrics.is_fork {
        improvements.push(
            "Clearly document your contributions and extend the project with original features."
                .to_string(),
        );
    }

    improvements.push(
        "Continue making small, meaningful updates to show maintenance and long-term ownership."
            .to_string(),
    );
    improvements
}

pub fn tech_summary(metrics: &RepositoryMetrics) -> String {
    format!(
        "Primary language: {} • Size: ~{} KB • Stars: {}, Forks: {}, Issues: {} • Last update: ~{} day(s) ago",
        metrics.language.as_deref().unwrap_or("Not specified"),
        metrics.size_kb,
        metrics.stars,
        metrics.forks,
        metrics.issues,
        round_days(metrics.days_inactive)
    )
}
