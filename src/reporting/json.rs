use crate::reporting::model::ScanReport;
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    scan_metadata: ScanMetadata,
    summary: Summary,
    results: &'a ScanReport,
}

#[derive(Serialize)]
struct ScanMetadata {
    tool: String,
    version: String,
    scan_date: String,
    report_format: String,
}

#[derive(Serialize)]
struct Summary {
    findings: bool,
    urls: usize,
    parameters: usize,
}

pub fn render(report: &ScanReport) -> anyhow::Result<String> {
    let summary = Summary {
        findings: !report.is_empty(),
        urls: report.url_count(),
        parameters: report.parameter_count(),
    };

    let doc = Report {
        scan_metadata: ScanMetadata {
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            scan_date: chrono::Utc::now().to_rfc3339(),
            report_format: "application/json".to_string(),
        },
        summary,
        results: report,
    };

    let json = serde_json::to_string_pretty(&doc)?;
    Ok(json)
}
