//! Period-over-period comparison datasets.

use serde::{Deserialize, Serialize};

use crate::metrics::{total_and_growth, GrowthSummary, Trend};

/// Granularity of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonMode {
    /// Current month vs previous month, by week
    #[default]
    Month,
    /// Current quarter vs previous quarter, by month
    Quarter,
    /// Current year vs previous year, by quarter
    Year,
}

impl ComparisonMode {
    pub const ALL: [ComparisonMode; 3] = [
        ComparisonMode::Month,
        ComparisonMode::Quarter,
        ComparisonMode::Year,
    ];

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ComparisonMode::Month => "Monthly",
            ComparisonMode::Quarter => "Quarterly",
            ComparisonMode::Year => "Yearly",
        }
    }
}

impl std::fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A labelled series of per-period values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSeries {
    pub label: String,
    pub data: Vec<f64>,
}

impl PeriodSeries {
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }

    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// Current period against the previous one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodComparison {
    pub mode: ComparisonMode,
    #[serde(default)]
    pub time_labels: Vec<String>,
    pub current: PeriodSeries,
    pub previous: PeriodSeries,
}

impl PeriodComparison {
    /// Totals of the current and previous series.
    pub fn totals(&self) -> (f64, f64) {
        (self.current.total(), self.previous.total())
    }

    /// Overall and per-period change.
    pub fn changes(&self) -> GrowthSummary {
        total_and_growth(&self.current.data, &self.previous.data)
    }

    /// Direction of the overall change.
    pub fn trend(&self) -> Trend {
        self.changes().trend()
    }

    /// Label for period `index`, falling back to its 1-based position.
    pub fn time_label(&self, index: usize) -> String {
        self.time_labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("#{}", index + 1))
    }

    /// Built-in revenue dataset for a mode.
    pub fn sample(mode: ComparisonMode) -> Self {
        fn labels(names: &[&str]) -> Vec<String> {
            names.iter().map(|s| s.to_string()).collect()
        }

        match mode {
            ComparisonMode::Month => Self {
                mode,
                current: PeriodSeries::new(
                    "Current Month",
                    vec![150000.0, 155000.0, 162000.0, 168000.0, 172000.0, 178000.0, 185000.0],
                ),
                previous: PeriodSeries::new(
                    "Previous Month",
                    vec![140000.0, 142000.0, 145000.0, 150000.0, 153000.0, 158000.0, 165000.0],
                ),
                time_labels: labels(&[
                    "Week 1", "Week 2", "Week 3", "Week 4", "Week 5", "Week 6", "Week 7",
                ]),
            },
            ComparisonMode::Quarter => Self {
                mode,
                current: PeriodSeries::new("Current Quarter", vec![450000.0, 480000.0, 510000.0]),
                previous: PeriodSeries::new("Previous Quarter", vec![420000.0, 430000.0, 445000.0]),
                time_labels: labels(&["Month 1", "Month 2", "Month 3"]),
            },
            ComparisonMode::Year => Self {
                mode,
                current: PeriodSeries::new(
                    "Current Year",
                    vec![1800000.0, 1900000.0, 2000000.0, 2100000.0],
                ),
                previous: PeriodSeries::new(
                    "Previous Year",
                    vec![1600000.0, 1650000.0, 1700000.0, 1750000.0],
                ),
                time_labels: labels(&["Q1", "Q2", "Q3", "Q4"]),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_quarter_changes() {
        let comparison = PeriodComparison::sample(ComparisonMode::Quarter);
        let (current, previous) = comparison.totals();
        assert_eq!(current, 1_440_000.0);
        assert_eq!(previous, 1_295_000.0);

        let changes = comparison.changes();
        assert_eq!(changes.pointwise.len(), 3);
        assert!((changes.overall - 11.196911196911197).abs() < 1e-9);
        assert_eq!(comparison.trend(), Trend::Up);
    }

    #[test]
    fn test_samples_have_matching_labels() {
        for mode in ComparisonMode::ALL {
            let comparison = PeriodComparison::sample(mode);
            assert_eq!(comparison.mode, mode);
            assert_eq!(comparison.current.data.len(), comparison.time_labels.len());
        }
    }

    #[test]
    fn test_time_label_fallback() {
        let comparison = PeriodComparison {
            mode: ComparisonMode::Month,
            current: PeriodSeries::new("Now", vec![1.0, 2.0]),
            previous: PeriodSeries::new("Before", vec![1.0]),
            time_labels: vec!["W1".to_string()],
        };
        assert_eq!(comparison.time_label(0), "W1");
        assert_eq!(comparison.time_label(1), "#2");
    }
}
