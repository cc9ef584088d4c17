// Report export — the JSON file a user downloads for a single analysis.
//
// The report shape is the one externally visible structured format, so its
// keys and their order must stay stable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

use crate::models::{AnalysisResult, Details, ThreatLevel};
use crate::target::TargetKind;

pub const GENERATED_BY: &str = "CyberGuard Security Platform";

/// Serializable view of one result in the export format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport<'a> {
    pub target: &'a str,
    #[serde(rename = "type")]
    pub kind: TargetKind,
    pub threat_level: ThreatLevel,
    pub security_score: u8,
    pub details: &'a Details,
    pub recommendations: &'a [String],
    /// When the analysis ran (RFC 3339, UTC, millisecond precision)
    pub timestamp: String,
    pub generated_by: &'static str,
}

impl<'a> From<&'a AnalysisResult> for ExportReport<'a> {
    fn from(result: &'a AnalysisResult) -> Self {
        Self {
            target: result.target(),
            kind: result.kind(),
            threat_level: result.threat_level(),
            security_score: result.security_score(),
            details: result.details(),
            recommendations: result.recommendations(),
            timestamp: result
                .created_at()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            generated_by: GENERATED_BY,
        }
    }
}

/// Render the report as pretty-printed JSON.
pub fn to_json(result: &AnalysisResult) -> Result<String> {
    let report = ExportReport::from(result);
    Ok(serde_json::to_string_pretty(&report)?)
}

/// `cyberguard-analysis-{type}-{unix millis}.json`
pub fn default_file_name(kind: TargetKind, unix_millis: i64) -> String {
    format!("cyberguard-analysis-{kind}-{unix_millis}.json")
}

/// Write the report for `result` and return the path written.
///
/// With no explicit `output`, the file goes into `export_dir` under the
/// default name.
pub fn write_report(
    result: &AnalysisResult,
    export_dir: &Path,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => export_dir.join(default_file_name(
            result.kind(),
            Utc::now().timestamp_millis(),
        )),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create export directory: {}", parent.display())
            })?;
        }
    }

    let json = to_json(result)?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!(id = %result.id(), path = %path.display(), "Exported analysis report");
    Ok(path)
}
