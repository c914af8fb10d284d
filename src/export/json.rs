//! JSON export of dashboard reports.

use serde::Serialize;

use super::ExportError;
use crate::report::DashboardReport;

/// Export a full report as pretty-printed JSON.
pub fn export_json(report: &DashboardReport) -> Result<String, ExportError> {
    export_value_json(report)
}

/// Export any report section as pretty-printed JSON.
pub fn export_value_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::AppConfig;
    use chrono::NaiveDate;

    #[test]
    fn test_export_json_parses_back() {
        let today = NaiveDate::from_ymd_opt(2023, 9, 23).unwrap();
        let report = DashboardReport::build(&AppConfig::default(), today);

        let json = export_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["generated_for"], "2023-09-23");
        assert_eq!(value["goals"][0]["days_remaining"], 7);
        assert_eq!(value["goals"][0]["deadline_status"], "due_soon");
        assert_eq!(value["comparisons"][0]["mode"], "month");
        assert_eq!(value["comparisons"][0]["trend"], "up");
    }

    #[test]
    fn test_export_json_zero_target_is_null() {
        let mut config = AppConfig::default();
        config.goals[0].target = 0.0;
        let today = NaiveDate::from_ymd_opt(2023, 9, 23).unwrap();
        let report = DashboardReport::build(&config, today);

        let json = export_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["goals"][0]["progress"].is_null());
    }
}
