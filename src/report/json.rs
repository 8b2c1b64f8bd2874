use crate::types::profile::ProfileOverview;
use crate::types::report::Report;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    overview: Option<&'a ProfileOverview>,
    #[serde(flatten)]
    report: &'a Report,
}

pub fn to_json(
    report: &Report,
    overview: Option<&ProfileOverview>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport { overview, report })
}
