use crate::error::{FolioError, Result};
use crate::extract::{activity, readme};
use crate::types::config::GithubSettings;
use crate::types::profile::{PublicEvent, UserProfile};
use crate::types::repository::{ReadmeSignals, RepositoryRecord};
use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, USER_AGENT};

const JSON_MEDIA_TYPE: &str = "application/vnd.github+json";
const RAW_MEDIA_TYPE: &str = "application/vnd.github.v3.raw";
const EVENTS_PER_PAGE: u32 = 100;

/// Single-page client for the hosting API. No auth, retries, or pagination.
pub struct GithubClient {
    http: Client,
    settings: GithubSettings,
}

impl GithubClient {
    pub fn new(settings: GithubSettings) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self { http, settings })
    }

    fn get(&self, path: &str, accept: &str) -> reqwest::Result<Response> {
        let url = format!("{}{}", self.settings.api_base, path);
        tracing::debug!(%url, "fetching");
        self.http
            .get(url)
            .header(USER_AGENT, &self.settings.user_agent)
            .header(ACCEPT, accept)
            .send()
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.get(path, JSON_MEDIA_TYPE)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::Fetch(format!("GET {path} returned {status}")));
        }
        Ok(response.json()?)
    }

    pub fn list_repositories(&self, user: &str) -> Result<Vec<RepositoryRecord>> {
        let repos: Vec<RepositoryRecord> = self.get_json(&format!(
            "/users/{user}/repos?per_page={}&sort=updated",
            self.settings.per_page
        ))?;
        tracing::info!(user, count = repos.len(), "fetched repositories");
        Ok(repos)
    }

    pub fn profile(&self, user: &str) -> Result<UserProfile> {
        self.get_json(&format!("/users/{user}"))
    }

    /// Daily push counts for the activity window. Any failure degrades to all zeros.
    pub fn push_activity(&self, user: &str, now: DateTime<Utc>) -> Vec<u32> {
        let path = format!("/users/{user}/events/public?per_page={EVENTS_PER_PAGE}");
        match self.get_json::<Vec<PublicEvent>>(&path) {
            Ok(events) => activity::push_activity(&events, now),
            Err(err) => {
                tracing::debug!(user, error = %err, "events unavailable, using empty activity");
                activity::push_activity(&[], now)
            }
        }
    }

    pub fn repository(&self, owner: &str, name: &str) -> Result<RepositoryRecord> {
        self.get_json(&format!("/repos/{owner}/{name}"))
    }

    /// README-derived signals. Any failure degrades to no signals.
    pub fn readme_signals(&self, owner: &str, name: &str) -> ReadmeSignals {
        let path = format!("/repos/{owner}/{name}/readme");
        let text = self
            .get(&path, RAW_MEDIA_TYPE)
            .and_then(Response::error_for_status)
            .and_then(Response::text);
        match text {
            Ok(text) => readme::detect(&text),
            Err(err) => {
                tracing::debug!(owner, name, error = %err, "readme unavailable, using default signals");
                ReadmeSignals::default()
            }
        }
    }
}

/// Splits `owner/name` into its parts.
pub fn parse_slug(slug: &str) -> Option<(&str, &str)> {
    let (owner, name) = slug.trim().trim_matches('/').split_once('/')?;
    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return None;
    }
    Some((owner, name))
}
