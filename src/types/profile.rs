use super::repository::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub login: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_repos: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub followers: u64,
}

/// One entry of the public events feed. Only push events are counted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

impl PublicEvent {
    pub fn is_push(&self) -> bool {
        self.kind == "PushEvent"
    }
}

/// Profile header shown above a fetched portfolio report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileOverview {
    pub profile: UserProfile,
    /// Push events per day, oldest first; the last bucket is today.
    pub push_activity: Vec<u32>,
}
