#![allow(deprecated)]

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const NOW: &str = "2025-06-01T00:00:00Z";

fn folio_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("folio").expect("binary should compile");
    cmd.arg("--config-dir").arg(dir);
    cmd
}

fn write_portfolio(dir: &Path) -> PathBuf {
    let path = dir.join("repos.json");
    fs::write(
        &path,
        r#"[
  {"name": "api", "owner": {"login": "octo"}, "description": "REST API", "language": "Rust",
   "updated_at": "2025-05-30T00:00:00Z", "stargazers_count": 4, "size": 420,
   "license": {"key": "mit"}, "topics": ["api"]},
  {"name": "site", "owner": {"login": "octo"}, "description": "Personal site", "language": "TypeScript",
   "homepage": "https://octo.dev", "has_pages": true, "updated_at": "2025-05-20T00:00:00Z", "size": 90},
  {"name": "fork-lib", "owner": {"login": "octo"}, "fork": true, "language": "Go",
   "updated_at": "2024-01-01T00:00:00Z", "size": 30}
]"#,
    )
    .expect("portfolio should write");
    path
}

fn write_repo(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("repo.json");
    fs::write(&path, body).expect("repo should write");
    path
}

#[test]
fn portfolio_markdown_report_has_all_sections() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_portfolio(dir.path());

    // count 3 (0), active30 2 (+2), docs 2/3 (+1.5), 3 languages (+1.5),
    // originals 2/3 (+1.5), homepage (+0.5), pages (+0.5), license (+0.25)
    folio_in(dir.path())
        .arg("portfolio")
        .arg("--input")
        .arg(&input)
        .arg("--now")
        .arg(NOW)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Portfolio Analysis Report"))
        .stdout(predicate::str::contains("Score: 7.8/10"))
        .stdout(predicate::str::contains("Ownership: 2/3 are original (67%)."))
        .stdout(predicate::str::contains(
            "Languages: Rust (1, 33%) | TypeScript (1, 33%) | Go (1, 33%).",
        ))
        .stdout(predicate::str::contains("## Improvements"));
}

#[test]
fn portfolio_json_report_uses_config_format() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_portfolio(dir.path());
    fs::write(dir.path().join("folio.toml"), "[report]\nformat = \"json\"\n")
        .expect("config should write");

    folio_in(dir.path())
        .arg("portfolio")
        .arg("--input")
        .arg(&input)
        .arg("--now")
        .arg(NOW)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 7.8"))
        .stdout(predicate::str::contains("\"tech_summary\""));
}

#[test]
fn portfolio_below_min_score_exits_with_warning_code() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_portfolio(dir.path());

    folio_in(dir.path())
        .arg("portfolio")
        .arg("--input")
        .arg(&input)
        .arg("--now")
        .arg(NOW)
        .arg("--min-score")
        .arg("9")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("below the minimum"));
}

#[test]
fn empty_portfolio_is_unavailable() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = dir.path().join("repos.json");
    fs::write(&input, "[]").expect("empty list should write");

    folio_in(dir.path())
        .arg("portfolio")
        .arg("--input")
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no repositories to analyze"));
}

#[test]
fn missing_input_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");

    folio_in(dir.path())
        .arg("portfolio")
        .arg("--input")
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn invalid_now_is_rejected() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_portfolio(dir.path());

    folio_in(dir.path())
        .arg("portfolio")
        .arg("--input")
        .arg(&input)
        .arg("--now")
        .arg("last tuesday")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid timestamp"));
}

#[test]
fn bare_fork_repo_scores_zero() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_repo(
        dir.path(),
        r#"{"name": "scratch", "fork": true, "updated_at": "2024-11-13T00:00:00Z", "size": 10}"#,
    );

    folio_in(dir.path())
        .arg("repo")
        .arg("--input")
        .arg(&input)
        .arg("--now")
        .arg(NOW)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Repository Analysis: scratch"))
        .stdout(predicate::str::contains("Score: 0/10"))
        .stdout(predicate::str::contains(
            "Project maturity: Beginner level (score 0/10).",
        ))
        .stdout(predicate::str::contains("No demo or screenshots detected."));
}

#[test]
fn polished_repo_with_readme_scores_ten() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_repo(
        dir.path(),
        r#"{"name": "flagship", "description": "Fast", "homepage": "https://flagship.dev",
            "license": {"key": "mit"}, "topics": ["cli"], "language": "Rust",
            "updated_at": "2025-06-01T00:00:00Z", "stargazers_count": 5, "forks_count": 1, "size": 500}"#,
    );
    let readme = dir.path().join("README.md");
    fs::write(&readme, "# Flagship\n![screen](docs/screen.png)\n").expect("readme should write");

    folio_in(dir.path())
        .arg("repo")
        .arg("--input")
        .arg(&input)
        .arg("--readme")
        .arg(&readme)
        .arg("--now")
        .arg(NOW)
        .arg("--format")
        .arg("json")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 10.0"))
        .stdout(predicate::str::contains("Advanced level"))
        .stdout(predicate::str::contains("visual proof"))
        .stdout(predicate::str::contains("\"weaknesses\": []"));
}

#[test]
fn readme_command_prints_detected_signals() {
    let dir = TempDir::new().expect("temp dir should be created");
    let readme = dir.path().join("README.md");
    fs::write(&readme, "Live demo: https://octo.github.io/app\n").expect("readme should write");

    folio_in(dir.path())
        .arg("readme")
        .arg(&readme)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"has_links\": true"))
        .stdout(predicate::str::contains("\"has_images\": false"));
}

#[test]
fn broken_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let input = write_portfolio(dir.path());
    fs::write(dir.path().join("folio.toml"), "[report\n").expect("config should write");

    folio_in(dir.path())
        .arg("portfolio")
        .arg("--input")
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("config parse error"));
}

#[test]
fn portfolio_user_fetch_renders_profile_and_activity() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/octo");
        then.status(200).json_body(json!({
            "login": "octo",
            "html_url": "https://github.com/octo",
            "bio": null,
            "public_repos": 2,
            "followers": 9
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/users/octo/repos");
        then.status(200).json_body(json!([
            {"name": "api", "owner": {"login": "octo"}, "description": "REST API", "language": "Rust",
             "updated_at": "2025-05-30T00:00:00Z", "stargazers_count": null, "topics": null},
            {"name": "cli", "owner": {"login": "octo"}, "language": "Go",
             "updated_at": "2025-05-01T00:00:00Z"}
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/users/octo/events/public");
        then.status(200).json_body(json!([
            {"type": "PushEvent", "created_at": "2025-05-31T18:00:00Z"},
            {"type": "PushEvent", "created_at": "2025-05-31T19:00:00Z"},
            {"type": "WatchEvent", "created_at": "2025-05-31T20:00:00Z"}
        ]));
    });

    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("folio.toml"),
        format!("[github]\napi_base = \"{}\"\n", server.base_url()),
    )
    .expect("config should write");

    folio_in(dir.path())
        .arg("portfolio")
        .arg("--user")
        .arg("octo")
        .arg("--now")
        .arg(NOW)
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "Profile: octo (https://github.com/octo) • 2 public repo(s) • 9 follower(s)",
        ))
        .stdout(predicate::str::contains("Bio: No bio provided"))
        .stdout(predicate::str::contains(
            "Push activity (last 14 days, oldest first): 0 0 0 0 0 0 0 0 0 0 0 0 0 2 (2 total)",
        ))
        .stdout(predicate::str::contains("Repository volume: 2 public repo(s)"));
}

#[test]
fn portfolio_user_fetch_failure_is_unavailable() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/ghost");
        then.status(404);
    });

    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("folio.toml"),
        format!("[github]\napi_base = \"{}\"\n", server.base_url()),
    )
    .expect("config should write");

    folio_in(dir.path())
        .arg("portfolio")
        .arg("--user")
        .arg("ghost")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("analysis unavailable"));
}

#[test]
fn repo_github_fetch_reads_readme_under_canonical_owner() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/OCTO/App");
        then.status(200).json_body(json!({
            "name": "app", "owner": {"login": "octo"}, "description": "Demo app",
            "license": {"key": "mit", "name": "MIT License"}, "updated_at": "2025-05-31T00:00:00Z"
        }));
    });
    let readme = server.mock(|when, then| {
        when.method(GET).path("/repos/octo/app/readme");
        then.status(200).body("![screen](docs/screen.webp)\n");
    });

    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("folio.toml"),
        format!("[github]\napi_base = \"{}\"\n", server.base_url()),
    )
    .expect("config should write");

    folio_in(dir.path())
        .arg("repo")
        .arg("--github")
        .arg("OCTO/App")
        .arg("--now")
        .arg(NOW)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Repository Analysis: app"))
        .stdout(predicate::str::contains("visual proof"))
        .stdout(predicate::str::contains("No license specified").not());
    readme.assert();
}
