//! Goal progress calculations.
//!
//! Progress is the share of a target reached by the current value, expressed
//! as a whole percentage and capped at 100.

use serde::{Deserialize, Serialize};

use super::error::{MetricsError, MetricsResult};

/// Upper bound of a progress ratio.
pub const MAX_PROGRESS: f64 = 100.0;

/// Compute `min(round(current / target * 100), 100)`.
///
/// Halves round toward positive infinity, so `-2.5` becomes `-2` and `2.5`
/// becomes `3`. Negative values are not clamped from below.
///
/// # Errors
///
/// Returns [`MetricsError::DivisionByZero`] when `target` is zero.
///
/// A NaN input yields NaN rather than the cap.
pub fn progress_ratio(current: f64, target: f64) -> MetricsResult<f64> {
    if target == 0.0 {
        return Err(MetricsError::DivisionByZero);
    }

    let percent = round_half_up(current / target * 100.0);
    // f64::min would swallow NaN and report the cap
    if percent > MAX_PROGRESS {
        Ok(MAX_PROGRESS)
    } else {
        Ok(percent)
    }
}

/// Round to the nearest integer with ties going toward positive infinity.
///
/// `f64::round` is exact at every magnitude, so only negative ties need
/// moving back up by one.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if rounded - value == -0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// Colour band of a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    /// Below 25%
    Critical,
    /// 25% to below 50%
    Low,
    /// 50% to below 75%
    Fair,
    /// 75% and above
    Good,
}

impl ProgressBand {
    /// Classify a progress percentage.
    pub fn from_progress(progress: f64) -> Self {
        if progress < 25.0 {
            ProgressBand::Critical
        } else if progress < 50.0 {
            ProgressBand::Low
        } else if progress < 75.0 {
            ProgressBand::Fair
        } else {
            ProgressBand::Good
        }
    }

    /// Get color for UI display (RGB).
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            ProgressBand::Critical => (239, 68, 68), // Red
            ProgressBand::Low => (249, 115, 22),     // Orange
            ProgressBand::Fair => (234, 179, 8),     // Yellow
            ProgressBand::Good => (34, 197, 94),     // Green
        }
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProgressBand::Critical => "Critical",
            ProgressBand::Low => "Low",
            ProgressBand::Fair => "Fair",
            ProgressBand::Good => "Good",
        }
    }
}

impl std::fmt::Display for ProgressBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_ratio_basic() {
        assert_eq!(progress_ratio(325_000.0, 500_000.0), Ok(65.0));
        assert_eq!(progress_ratio(8_750.0, 10_000.0), Ok(88.0));
        assert_eq!(progress_ratio(3.2, 5.0), Ok(64.0));
    }

    #[test]
    fn test_progress_ratio_caps_at_100() {
        assert_eq!(progress_ratio(750.0, 500.0), Ok(100.0));
    }

    #[test]
    fn test_progress_ratio_zero_target() {
        assert_eq!(progress_ratio(10.0, 0.0), Err(MetricsError::DivisionByZero));
        assert_eq!(progress_ratio(0.0, 0.0), Err(MetricsError::DivisionByZero));
        assert_eq!(progress_ratio(-5.0, 0.0), Err(MetricsError::DivisionByZero));
    }

    #[test]
    fn test_progress_ratio_rounds_half_up() {
        // 1 / 8 = 12.5%
        assert_eq!(progress_ratio(1.0, 8.0), Ok(13.0));
        // -1 / 8 = -12.5%
        assert_eq!(progress_ratio(-1.0, 8.0), Ok(-12.0));
    }

    #[test]
    fn test_progress_ratio_nan_current() {
        assert!(progress_ratio(f64::NAN, 5.0).unwrap().is_nan());
        assert!(progress_ratio(5.0, f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_round_half_up_edges() {
        assert_eq!(round_half_up(0.499_999_999_999_999_94), 0.0);
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-2.6), -3.0);

        // Integers above 2^52 are already exact
        let big = 2f64.powi(52) + 1.0;
        assert_eq!(round_half_up(big), big);
        assert_eq!(round_half_up(-big), -big);
    }

    #[test]
    fn test_progress_ratio_negative_target() {
        assert_eq!(progress_ratio(50.0, -100.0), Ok(-50.0));
    }

    #[test]
    fn test_progress_band_thresholds() {
        assert_eq!(ProgressBand::from_progress(0.0), ProgressBand::Critical);
        assert_eq!(ProgressBand::from_progress(24.0), ProgressBand::Critical);
        assert_eq!(ProgressBand::from_progress(25.0), ProgressBand::Low);
        assert_eq!(ProgressBand::from_progress(49.0), ProgressBand::Low);
        assert_eq!(ProgressBand::from_progress(50.0), ProgressBand::Fair);
        assert_eq!(ProgressBand::from_progress(74.0), ProgressBand::Fair);
        assert_eq!(ProgressBand::from_progress(75.0), ProgressBand::Good);
        assert_eq!(ProgressBand::from_progress(100.0), ProgressBand::Good);
    }
}
