//! Deadline arithmetic.
//!
//! Both forms take the reference "now" explicitly so callers control the clock.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Days a deadline is within before it is flagged as due soon.
pub const DUE_SOON_DAYS: i64 = 7;

/// Whole days from `reference_now` to `deadline`; negative when overdue.
pub fn days_remaining(deadline: NaiveDate, reference_now: NaiveDate) -> i64 {
    (deadline - reference_now).num_days()
}

/// Ceiling of the day difference between two instants.
///
/// A deadline 36 hours away counts as 2 days; one 12 hours past counts as 0.
pub fn days_remaining_at(deadline: DateTime<Utc>, reference_now: DateTime<Utc>) -> i64 {
    let millis = (deadline - reference_now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

/// Badge shown next to a goal's deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineStatus {
    /// Deadline is today or already passed
    Overdue,
    /// Deadline within [`DUE_SOON_DAYS`]
    DueSoon,
    /// More time remains
    OnTrack,
}

impl DeadlineStatus {
    /// Classify a days-remaining value.
    pub fn from_days(days: i64) -> Self {
        if days <= 0 {
            DeadlineStatus::Overdue
        } else if days <= DUE_SOON_DAYS {
            DeadlineStatus::DueSoon
        } else {
            DeadlineStatus::OnTrack
        }
    }

    /// Whether the badge should draw attention.
    pub fn needs_attention(&self) -> bool {
        !matches!(self, DeadlineStatus::OnTrack)
    }

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            DeadlineStatus::Overdue => "Overdue",
            DeadlineStatus::DueSoon => "Due Soon",
            DeadlineStatus::OnTrack => "On Track",
        }
    }
}

impl std::fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
