//! Business goal type definitions.

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metrics::{
    days_remaining, progress_ratio, DeadlineStatus, MetricsResult, ProgressBand,
};

/// A tracked business goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier, nil until assigned
    #[serde(default)]
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Value to reach, in `unit`
    pub target: f64,
    /// Value reached so far, in `unit`
    #[serde(default)]
    pub current: f64,
    /// Unit tag such as `$`, `users` or `%`
    #[serde(default)]
    pub unit: String,
    /// Date the goal should be reached by
    pub deadline: NaiveDate,
    /// Goal category
    #[serde(default)]
    pub category: GoalCategory,
    /// When the goal was created
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal with a fresh id.
    pub fn new(
        title: impl Into<String>,
        target: f64,
        unit: impl Into<String>,
        deadline: NaiveDate,
        category: GoalCategory,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            target,
            current: 0.0,
            unit: unit.into(),
            deadline,
            category,
            created_at: Utc::now(),
        }
    }

    /// Give the goal a fresh id if it has none. Returns whether it changed.
    pub fn ensure_id(&mut self) -> bool {
        if self.id.is_nil() {
            self.id = Uuid::new_v4();
            true
        } else {
            false
        }
    }

    /// Set the current value.
    pub fn with_current(mut self, current: f64) -> Self {
        self.current = current;
        self
    }

    /// Progress toward the target (0-100, capped).
    pub fn progress(&self) -> MetricsResult<f64> {
        progress_ratio(self.current, self.target)
    }

    /// Gap to target (positive = still short of it).
    pub fn gap(&self) -> f64 {
        self.target - self.current
    }

    /// Whether the current value has reached the target.
    pub fn is_achieved(&self) -> bool {
        matches!(self.progress(), Ok(p) if p >= 100.0)
    }

    /// Days until the deadline as seen from `today`.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        days_remaining(self.deadline, today)
    }

    /// Deadline badge as seen from `today`.
    pub fn deadline_status(&self, today: NaiveDate) -> DeadlineStatus {
        DeadlineStatus::from_days(self.days_remaining(today))
    }

    /// Snapshot of the derived values the dashboard renders.
    pub fn summarize(&self, today: NaiveDate) -> GoalSummary {
        let progress = self.progress().ok().filter(|p| p.is_finite());
        let days = self.days_remaining(today);

        GoalSummary {
            id: self.id,
            title: self.title.clone(),
            category: self.category,
            unit: self.unit.clone(),
            current: self.current,
            target: self.target,
            progress,
            band: progress.map(ProgressBand::from_progress),
            days_remaining: days,
            deadline_status: DeadlineStatus::from_days(days),
        }
    }
}

/// Category of a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    /// Revenue targets
    Revenue,
    /// User or customer growth
    Growth,
    /// Conversion rates
    Conversion,
    /// Engagement metrics
    Engagement,
    /// Anything else
    #[default]
    Other,
}

impl GoalCategory {
    /// All categories in display order.
    pub const ALL: [GoalCategory; 5] = [
        GoalCategory::Revenue,
        GoalCategory::Growth,
        GoalCategory::Conversion,
        GoalCategory::Engagement,
        GoalCategory::Other,
    ];

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalCategory::Revenue => "Revenue",
            GoalCategory::Growth => "Growth",
            GoalCategory::Conversion => "Conversion",
            GoalCategory::Engagement => "Engagement",
            GoalCategory::Other => "Other",
        }
    }

    /// Lowercase identifier used in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Revenue => "revenue",
            GoalCategory::Growth => "growth",
            GoalCategory::Conversion => "conversion",
            GoalCategory::Engagement => "engagement",
            GoalCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown goal category: {}", s))
    }
}

/// Input for a goal that has not been added yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub title: String,
    pub target: f64,
    pub current: f64,
    pub unit: String,
    pub deadline: NaiveDate,
    pub category: GoalCategory,
}

impl NewGoal {
    /// Blank form whose deadline defaults to three months after `today`.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            target: 0.0,
            current: 0.0,
            unit: String::new(),
            deadline: today.checked_add_months(Months::new(3)).unwrap_or(today),
            category: GoalCategory::Other,
        }
    }
}

/// Partial edit applied to an existing goal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub target: Option<f64>,
    pub current: Option<f64>,
    pub unit: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub category: Option<GoalCategory>,
}

impl GoalUpdate {
    /// Merge the set fields into `goal`.
    pub fn apply_to(&self, goal: &mut Goal) {
        if let Some(title) = &self.title {
            goal.title = title.clone();
        }
        if let Some(target) = self.target {
            goal.target = target;
        }
        if let Some(current) = self.current {
            goal.current = current;
        }
        if let Some(unit) = &self.unit {
            goal.unit = unit.clone();
        }
        if let Some(deadline) = self.deadline {
            goal.deadline = deadline;
        }
        if let Some(category) = self.category {
            goal.category = category;
        }
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == GoalUpdate::default()
    }
}

/// Derived values for one goal at a reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSummary {
    pub id: Uuid,
    pub title: String,
    pub category: GoalCategory,
    pub unit: String,
    pub current: f64,
    pub target: f64,
    /// `None` when the target is zero or the value is not a number
    pub progress: Option<f64>,
    pub band: Option<ProgressBand>,
    pub days_remaining: i64,
    pub deadline_status: DeadlineStatus,
}
