//! In-memory goal tracker.
//!
//! Holds the dashboard's goals in insertion order and applies the add / edit /
//! delete operations of the goal editor.

use chrono::NaiveDate;
use uuid::Uuid;

use super::types::{Goal, GoalCategory, GoalSummary, GoalUpdate, NewGoal};

/// Tracker for business goals.
#[derive(Debug, Clone, Default)]
pub struct GoalTracker {
    goals: Vec<Goal>,
}

impl GoalTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker from previously stored goals.
    pub fn from_goals(goals: Vec<Goal>) -> Self {
        Self { goals }
    }

    /// Consume the tracker, returning its goals.
    pub fn into_goals(self) -> Vec<Goal> {
        self.goals
    }

    /// Add a goal from form input.
    pub fn add(&mut self, input: NewGoal) -> Result<Uuid, GoalError> {
        if input.title.trim().is_empty() {
            return Err(GoalError::ValidationError(
                "Goal title must not be empty".to_string(),
            ));
        }
        validate_target(input.target)?;
        validate_current(input.current)?;

        let goal = Goal::new(
            input.title,
            input.target,
            input.unit,
            input.deadline,
            input.category,
        )
        .with_current(input.current);
        let id = goal.id;

        tracing::debug!(%id, title = %goal.title, "Goal added");
        self.goals.push(goal);

        Ok(id)
    }

    /// Get a goal by ID.
    pub fn get(&self, id: Uuid) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Apply a partial edit to a goal.
    pub fn update(&mut self, id: Uuid, update: GoalUpdate) -> Result<(), GoalError> {
        if let Some(target) = update.target {
            validate_target(target)?;
        }
        if let Some(current) = update.current {
            validate_current(current)?;
        }
        if matches!(&update.title, Some(title) if title.trim().is_empty()) {
            return Err(GoalError::ValidationError(
                "Goal title must not be empty".to_string(),
            ));
        }

        let goal = self.get_mut(id)?;
        update.apply_to(goal);

        tracing::debug!(%id, "Goal updated");
        Ok(())
    }

    /// Update the current value of a goal.
    pub fn update_progress(&mut self, id: Uuid, current: f64) -> Result<(), GoalError> {
        self.update(
            id,
            GoalUpdate {
                current: Some(current),
                ..Default::default()
            },
        )
    }

    /// Delete a goal. Returns whether it existed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        let removed = self.goals.len() < before;
        if removed {
            tracing::debug!(%id, "Goal removed");
        }
        removed
    }

    /// Iterate over goals in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Goals in a category.
    pub fn by_category(&self, category: GoalCategory) -> Vec<&Goal> {
        self.goals.iter().filter(|g| g.category == category).collect()
    }

    /// Goals whose deadline is today or already passed.
    pub fn overdue(&self, today: NaiveDate) -> Vec<&Goal> {
        self.goals
            .iter()
            .filter(|g| g.days_remaining(today) <= 0)
            .collect()
    }

    /// Goals due within `days` days (excluding overdue ones), soonest first.
    pub fn due_within(&self, today: NaiveDate, days: i64) -> Vec<&Goal> {
        let mut upcoming: Vec<&Goal> = self
            .goals
            .iter()
            .filter(|g| {
                let remaining = g.days_remaining(today);
                remaining > 0 && remaining <= days
            })
            .collect();
        upcoming.sort_by_key(|g| g.deadline);
        upcoming
    }

    /// Derived values for every goal.
    pub fn summaries(&self, today: NaiveDate) -> Vec<GoalSummary> {
        self.goals.iter().map(|g| g.summarize(today)).collect()
    }

    fn get_mut(&mut self, id: Uuid) -> Result<&mut Goal, GoalError> {
        self.goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(GoalError::NotFound(id))
    }
}

fn validate_target(target: f64) -> Result<(), GoalError> {
    if target == 0.0 || !target.is_finite() {
        return Err(GoalError::ValidationError(
            "Goal target must be a nonzero number".to_string(),
        ));
    }
    Ok(())
}

fn validate_current(current: f64) -> Result<(), GoalError> {
    if !current.is_finite() {
        return Err(GoalError::ValidationError(
            "Goal current value must be a finite number".to_string(),
        ));
    }
    Ok(())
}

/// Goal management errors.
#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Goal not found: {0}")]
    NotFound(Uuid),
}
