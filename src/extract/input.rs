use super::readme;
use crate::error::{FolioError, Result};
use crate::types::repository::{ReadmeSignals, RepositoryRecord};
use serde::de::DeserializeOwned;
use std::path::Path;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(FolioError::InputNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| FolioError::InputParse(format!("{}: {}", path.display(), e)))
}

/// Reads a "list repositories for user" payload (a JSON array of records).
pub fn load_repositories(path: &Path) -> Result<Vec<RepositoryRecord>> {
    let repos: Vec<RepositoryRecord> = read_json(path)?;
    tracing::debug!(path = %path.display(), count = repos.len(), "loaded repository records");
    Ok(repos)
}

pub fn load_repository(path: &Path) -> Result<RepositoryRecord> {
    read_json(path)
}

/// README signals from a local file. A missing or unreadable README degrades to no signals.
pub fn load_readme_signals(path: &Path) -> ReadmeSignals {
    match std::fs::read_to_string(path) {
        Ok(text) => readme::detect(&text),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "readme unavailable, using default signals");
            ReadmeSignals::default()
        }
    }
}
