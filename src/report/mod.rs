pub mod json;
pub mod md;

use crate::error::FolioError;
use crate::types::profile::ProfileOverview;
use crate::types::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(
    title: &str,
    report: &Report,
    overview: Option<&ProfileOverview>,
    format: OutputFormat,
) -> Result<String, FolioError> {
    match format {
        OutputFormat::Json => json::to_json(report, overview).map_err(FolioError::Json),
        OutputFormat::Md => Ok(md::to_markdown(title, report, overview)),
    }
}
