use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("input parse error: {0}")]
    InputParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("analysis unavailable: {0}")]
    Fetch(String),

    #[error("analysis unavailable: no repositories to analyze")]
    EmptyPortfolio,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl FolioError {
    /// Upstream data could not be obtained; the caller reports the analysis as unavailable.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            FolioError::Fetch(_) | FolioError::EmptyPortfolio | FolioError::Http(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
