use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FolioConfig {
    pub report: Option<ReportConfig>,
    pub github: Option<GithubConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    Md,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatSetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubConfig {
    pub api_base: Option<String>,
    pub per_page: Option<u32>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GithubSettings {
    pub api_base: String,
    pub per_page: u32,
    pub user_agent: String,
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            per_page: DEFAULT_PER_PAGE,
            user_agent: concat!("folio/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FolioConfig {
    pub fn report_format(&self) -> Option<ReportFormatSetting> {
        self.report.as_ref().and_then(|report| report.format)
    }

    pub fn github_settings(&self) -> GithubSettings {
        let defaults = GithubSettings::default();
        match &self.github {
            Some(github) => GithubSettings {
                api_base: github
                    .api_base
                    .as_ref()
                    .map(|base| base.trim_end_matches('/').to_string())
                    .unwrap_or(defaults.api_base),
                per_page: github
                    .per_page
                    .map(|per_page| per_page.clamp(1, MAX_PER_PAGE))
                    .unwrap_or(defaults.per_page),
                user_agent: github.user_agent.clone().unwrap_or(defaults.user_agent),
            },
            None => defaults,
        }
    }
}
