//! Period-over-period change calculations.

use serde::{Deserialize, Serialize};

/// Percent change reported when the previous value is zero.
pub const ZERO_BASELINE_CHANGE: f64 = 100.0;

/// Compute `(current - previous) / previous * 100`.
///
/// A zero `previous` yields [`ZERO_BASELINE_CHANGE`] rather than infinity.
/// The metric is not symmetric: swapping the arguments does not negate it.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return ZERO_BASELINE_CHANGE;
    }
    (current - previous) / previous * 100.0
}

/// Overall and per-period growth of one series against another.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthSummary {
    /// Percent change of the series totals.
    pub overall: f64,
    /// Percent change at each index of the current series.
    pub pointwise: Vec<f64>,
}

impl GrowthSummary {
    /// Trend of the overall change.
    pub fn trend(&self) -> Trend {
        Trend::of(self.overall)
    }
}

/// Compare a current series against a previous one.
///
/// `overall` compares the sums; two zero sums (e.g. both series empty) give
/// `0` instead of the zero-baseline sentinel. `pointwise` has one entry per
/// element of `current`; positions past the end of `previous` are `0`.
pub fn total_and_growth(current: &[f64], previous: &[f64]) -> GrowthSummary {
    let current_total: f64 = current.iter().sum();
    let previous_total: f64 = previous.iter().sum();

    let overall = if current_total == 0.0 && previous_total == 0.0 {
        0.0
    } else {
        percent_change(current_total, previous_total)
    };

    let pointwise = current
        .iter()
        .enumerate()
        .map(|(index, &value)| match previous.get(index) {
            Some(&prev) => percent_change(value, prev),
            None => 0.0,
        })
        .collect();

    GrowthSummary { overall, pointwise }
}

/// Direction of a change, as shown by a trend arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// Zero or positive change
    Up,
    /// Negative change
    Down,
}

impl Trend {
    /// Classify a percent change.
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    /// Lowercase name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }

    /// Arrow glyph for text output.
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_percent_change_known_values() {
        assert_close(percent_change(150.0, 100.0), 50.0);
        assert_close(percent_change(50.0, 100.0), -50.0);
        assert_close(percent_change(42.0, 42.0), 0.0);
    }

    #[test]
    fn test_percent_change_zero_baseline() {
        assert_eq!(percent_change(10.0, 0.0), 100.0);
        assert_eq!(percent_change(-10.0, 0.0), 100.0);
        assert_eq!(percent_change(0.0, 0.0), 100.0);
    }

    #[test]
    fn test_percent_change_is_asymmetric() {
        let forward = percent_change(150.0, 100.0);
        let backward = percent_change(100.0, 150.0);
        assert_close(forward, 50.0);
        assert!((backward - (-100.0 / 3.0)).abs() < 1e-9);
        assert!((forward + backward).abs() > 1.0);
    }

    #[test]
    fn test_total_and_growth_overall() {
        let summary = total_and_growth(&[110.0, 220.0], &[100.0, 200.0]);
        assert_close(summary.overall, 10.0);
        assert_eq!(summary.pointwise.len(), 2);
        assert_close(summary.pointwise[0], 10.0);
        assert_close(summary.pointwise[1], 10.0);
    }

    #[test]
    fn test_total_and_growth_pads_missing_previous() {
        let summary = total_and_growth(&[100.0, 200.0, 50.0], &[100.0, 200.0]);
        assert_eq!(summary.pointwise, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_total_and_growth_longer_previous() {
        let summary = total_and_growth(&[100.0], &[100.0, 200.0]);
        assert_eq!(summary.pointwise.len(), 1);
        assert_close(summary.overall, percent_change(100.0, 300.0));
    }

    #[test]
    fn test_total_and_growth_empty() {
        let summary = total_and_growth(&[], &[]);
        assert_eq!(summary.overall, 0.0);
        assert!(summary.pointwise.is_empty());
    }

    #[test]
    fn test_total_and_growth_zero_previous_total() {
        let summary = total_and_growth(&[5.0], &[]);
        assert_eq!(summary.overall, ZERO_BASELINE_CHANGE);
        assert_eq!(summary.pointwise, vec![0.0]);
    }

    #[test]
    fn test_trend() {
        assert_eq!(Trend::of(0.0), Trend::Up);
        assert_eq!(Trend::of(3.5), Trend::Up);
        assert_eq!(Trend::of(-0.1), Trend::Down);
    }
}
