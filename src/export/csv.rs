//! CSV export of dashboard report sections.

use ::csv::{Writer, WriterBuilder};

use super::ExportError;
use crate::goals::GoalSummary;
use crate::report::{AllocationReport, ComparisonReport, KpiReport};

fn new_writer() -> Writer<Vec<u8>> {
    WriterBuilder::new().from_writer(Vec::new())
}

fn finish(writer: Writer<Vec<u8>>) -> Result<String, ExportError> {
    let output = writer
        .into_inner()
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    String::from_utf8(output).map_err(|e| ExportError::WriteFailed(e.to_string()))
}

/// Export goal summaries to CSV format.
pub fn export_goals_csv(goals: &[GoalSummary]) -> Result<String, ExportError> {
    if goals.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut writer = new_writer();

    // Write header
    writer.write_record([
        "id",
        "title",
        "category",
        "unit",
        "current",
        "target",
        "progress_percent",
        "band",
        "days_remaining",
        "deadline_status",
    ])?;

    // Write data rows
    for goal in goals {
        writer.write_record([
            goal.id.to_string(),
            goal.title.clone(),
            goal.category.as_str().to_string(),
            goal.unit.clone(),
            goal.current.to_string(),
            goal.target.to_string(),
            goal.progress.map_or(String::new(), |v| format!("{:.0}", v)),
            goal.band.map_or(String::new(), |b| b.display_name().to_string()),
            goal.days_remaining.to_string(),
            goal.deadline_status.display_name().to_string(),
        ])?;
    }

    finish(writer)
}

/// Export the month-over-month sales KPIs as a single row.
pub fn export_kpis_csv(kpis: Option<&KpiReport>) -> Result<String, ExportError> {
    let kpis = kpis.ok_or(ExportError::NoData)?;

    let mut writer = new_writer();

    writer.write_record([
        "month",
        "previous_month",
        "revenue",
        "orders",
        "revenue_growth_percent",
        "orders_growth_percent",
        "trend",
    ])?;
    writer.write_record([
        kpis.month.clone(),
        kpis.previous_month.clone(),
        kpis.revenue.to_string(),
        kpis.orders.to_string(),
        format!("{:.2}", kpis.revenue_growth),
        format!("{:.2}", kpis.orders_growth),
        kpis.trend.as_str().to_string(),
    ])?;

    finish(writer)
}

/// Export period comparisons to CSV format, one row per period.
pub fn export_comparisons_csv(comparisons: &[ComparisonReport]) -> Result<String, ExportError> {
    if comparisons.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut writer = new_writer();

    writer.write_record([
        "mode",
        "period",
        "current",
        "previous",
        "change_percent",
        "overall_change_percent",
    ])?;

    for comparison in comparisons {
        for point in &comparison.points {
            writer.write_record([
                comparison.mode.display_name().to_string(),
                point.label.clone(),
                point.current.to_string(),
                point.previous.map_or(String::new(), |v| v.to_string()),
                format!("{:.2}", point.change),
                format!("{:.2}", comparison.overall_change),
            ])?;
        }
    }

    finish(writer)
}

/// Export allocation breakdowns to CSV format.
pub fn export_allocations_csv(allocations: &[AllocationReport]) -> Result<String, ExportError> {
    if allocations.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut writer = new_writer();

    writer.write_record(["allocation", "label", "value", "percentage"])?;

    for allocation in allocations {
        for share in &allocation.shares {
            writer.write_record([
                allocation.name.clone(),
                share.label.clone(),
                share.value.to_string(),
                format!("{:.1}", share.percentage),
            ])?;
        }
    }

    finish(writer)
}
