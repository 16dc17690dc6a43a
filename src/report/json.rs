use crate::types::report::PageReport;

pub fn to_json(report: &PageReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn to_json_all(reports: &[PageReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}
