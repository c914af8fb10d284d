//! Business goals module.
//!
//! Tracks revenue, growth, conversion and engagement targets with deadlines,
//! and derives the progress bars and deadline badges the dashboard shows.

pub mod tracker;
pub mod types;

// Re-exports for convenience
pub use tracker::{GoalError, GoalTracker};
pub use types::{Goal, GoalCategory, GoalSummary, GoalUpdate, NewGoal};
