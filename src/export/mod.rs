//! Report export (JSON and CSV).

pub mod csv;
pub mod json;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::report::DashboardReport;

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension().to_uppercase())
    }
}

/// Part of a report to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportSection {
    #[default]
    All,
    Goals,
    Kpis,
    Comparisons,
    Allocations,
}

impl ExportSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportSection::All => "report",
            ExportSection::Goals => "goals",
            ExportSection::Kpis => "kpis",
            ExportSection::Comparisons => "comparisons",
            ExportSection::Allocations => "allocations",
        }
    }
}

/// Render a report section in the given format.
///
/// CSV for [`ExportSection::All`] concatenates the non-empty sections, each
/// introduced by a `# <section>` line.
pub fn render(
    report: &DashboardReport,
    format: ExportFormat,
    section: ExportSection,
) -> Result<String, ExportError> {
    match (format, section) {
        (ExportFormat::Json, ExportSection::All) => json::export_json(report),
        (ExportFormat::Json, ExportSection::Goals) => json::export_value_json(&report.goals),
        (ExportFormat::Json, ExportSection::Kpis) => match &report.kpis {
            Some(kpis) => json::export_value_json(kpis),
            None => Err(ExportError::NoData),
        },
        (ExportFormat::Json, ExportSection::Comparisons) => {
            json::export_value_json(&report.comparisons)
        }
        (ExportFormat::Json, ExportSection::Allocations) => {
            json::export_value_json(&report.allocations)
        }
        (ExportFormat::Csv, ExportSection::Goals) => csv::export_goals_csv(&report.goals),
        (ExportFormat::Csv, ExportSection::Kpis) => csv::export_kpis_csv(report.kpis.as_ref()),
        (ExportFormat::Csv, ExportSection::Comparisons) => {
            csv::export_comparisons_csv(&report.comparisons)
        }
        (ExportFormat::Csv, ExportSection::Allocations) => {
            csv::export_allocations_csv(&report.allocations)
        }
        (ExportFormat::Csv, ExportSection::All) => {
            let parts = [
                (ExportSection::Goals, csv::export_goals_csv(&report.goals)),
                (ExportSection::Kpis, csv::export_kpis_csv(report.kpis.as_ref())),
                (
                    ExportSection::Comparisons,
                    csv::export_comparisons_csv(&report.comparisons),
                ),
                (
                    ExportSection::Allocations,
                    csv::export_allocations_csv(&report.allocations),
                ),
            ];

            let mut sections = Vec::new();
            for (section, result) in parts {
                match result {
                    Ok(body) => sections.push(format!("# {}\n{}", section.as_str(), body)),
                    Err(ExportError::NoData) => continue,
                    Err(e) => return Err(e),
                }
            }

            if sections.is_empty() {
                return Err(ExportError::NoData);
            }
            Ok(sections.join("\n"))
        }
    }
}

/// Render a report section and write it to a file.
pub fn export_to_file(
    report: &DashboardReport,
    format: ExportFormat,
    section: ExportSection,
    path: &Path,
) -> Result<(), ExportError> {
    let content = render(report, format, section)?;
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), %format, section = section.as_str(), "Exported report");
    Ok(())
}

/// Generate a default filename for an export.
pub fn generate_filename(date: NaiveDate, format: ExportFormat, section: ExportSection) -> String {
    format!(
        "Bizdash_{}_{}.{}",
        section.as_str(),
        date.format("%Y%m%d"),
        format.extension()
    )
}

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export
    #[error("Report section has no data to export")]
    NoData,

    /// Failed to write output
    #[error("Failed to write export: {0}")]
    WriteFailed(String),

    /// CSV encoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    /// Serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
