use crate::types::profile::ProfileOverview;
use crate::types::report::Report;

fn push_section(output: &mut String, heading: &str, items: &[String]) {
    output.push_str(&format!("## {heading}\n\n"));
    if items.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    for item in items {
        output.push_str(&format!("- {item}\n"));
    }
    output.push('\n');
}

fn push_overview(output: &mut String, overview: &ProfileOverview) {
    let profile = &overview.profile;
    output.push_str(&format!(
        "Profile: {} ({}) • {} public repo(s) • {} follower(s)\n",
        profile.login, profile.html_url, profile.public_repos, profile.followers
    ));
    let bio = profile
        .bio
        .as_deref()
        .filter(|bio| !bio.is_empty())
        .unwrap_or("No bio provided");
    output.push_str(&format!("Bio: {bio}\n"));

    let days = overview
        .push_activity
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    let total: u32 = overview.push_activity.iter().sum();
    output.push_str(&format!(
        "Push activity (last {} days, oldest first): {days} ({total} total)\n\n",
        overview.push_activity.len()
    ));
}

pub fn to_markdown(title: &str, report: &Report, overview: Option<&ProfileOverview>) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {title}\n\n"));
    if let Some(overview) = overview {
        push_overview(&mut output, overview);
    }
    output.push_str(&format!("Score: {}/10\n\n", report.score));

    push_section(&mut output, "Strengths", &report.strengths);
    push_section(&mut output, "Weaknesses", &report.weaknesses);
    push_section(&mut output, "Improvements", &report.improvements);

    output.push_str("## Tech Summary\n\n");
    output.push_str(&report.tech_summary);
    output.push('\n');
    output
}
