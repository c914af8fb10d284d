//! Integration tests for the goal tracker lifecycle.
//!
//! Create, edit, progress and delete goals the way the goal editor does, and
//! check the derived badges along the way.

use bizdash::goals::{GoalCategory, GoalError, GoalTracker, GoalUpdate, NewGoal};
use bizdash::metrics::{DeadlineStatus, ProgressBand};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_goal(title: &str, target: f64, current: f64, deadline: NaiveDate) -> NewGoal {
    NewGoal {
        title: title.to_string(),
        target,
        current,
        unit: "users".to_string(),
        deadline,
        category: GoalCategory::Growth,
    }
}

#[test]
fn test_goal_lifecycle() {
    let today = date(2023, 8, 1);
    let mut tracker = GoalTracker::new();

    let id = tracker
        .add(new_goal("New User Acquisition", 10_000.0, 2_000.0, date(2023, 8, 31)))
        .unwrap();

    let summary = &tracker.summaries(today)[0];
    assert_eq!(summary.progress, Some(20.0));
    assert_eq!(summary.band, Some(ProgressBand::Critical));
    assert_eq!(summary.days_remaining, 30);
    assert_eq!(summary.deadline_status, DeadlineStatus::OnTrack);

    tracker.update_progress(id, 8_750.0).unwrap();
    let summary = &tracker.summaries(date(2023, 8, 28))[0];
    assert_eq!(summary.progress, Some(88.0));
    assert_eq!(summary.band, Some(ProgressBand::Good));
    assert_eq!(summary.deadline_status, DeadlineStatus::DueSoon);

    tracker
        .update(
            id,
            GoalUpdate {
                title: Some("Signups".to_string()),
                deadline: Some(date(2023, 8, 20)),
                ..Default::default()
            },
        )
        .unwrap();
    let goal = tracker.get(id).unwrap();
    assert_eq!(goal.title, "Signups");
    assert_eq!(goal.current, 8_750.0);
    assert_eq!(goal.deadline_status(date(2023, 8, 28)), DeadlineStatus::Overdue);

    assert!(tracker.remove(id));
    assert!(tracker.is_empty());
}

#[test]
fn test_progress_capped_when_target_exceeded() {
    let mut tracker = GoalTracker::new();
    let id = tracker
        .add(new_goal("Stretch", 100.0, 180.0, date(2023, 12, 31)))
        .unwrap();

    let goal = tracker.get(id).unwrap();
    assert_eq!(goal.progress(), Ok(100.0));
    assert!(goal.is_achieved());
}

#[test]
fn test_validation_errors() {
    let mut tracker = GoalTracker::new();

    assert!(matches!(
        tracker.add(new_goal("", 10.0, 0.0, date(2023, 12, 31))),
        Err(GoalError::ValidationError(_))
    ));
    assert!(matches!(
        tracker.add(new_goal("No target", 0.0, 0.0, date(2023, 12, 31))),
        Err(GoalError::ValidationError(_))
    ));

    let id = tracker
        .add(new_goal("Valid", 10.0, 0.0, date(2023, 12, 31)))
        .unwrap();
    assert!(matches!(
        tracker.update(
            id,
            GoalUpdate {
                title: Some("   ".to_string()),
                ..Default::default()
            }
        ),
        Err(GoalError::ValidationError(_))
    ));
}

#[test]
fn test_filter_by_category() {
    let mut tracker = GoalTracker::new();
    tracker
        .add(new_goal("Growth goal", 10.0, 0.0, date(2023, 12, 31)))
        .unwrap();
    tracker
        .add(NewGoal {
            category: GoalCategory::Revenue,
            ..new_goal("Revenue goal", 10.0, 0.0, date(2023, 12, 31))
        })
        .unwrap();

    assert_eq!(tracker.by_category(GoalCategory::Revenue).len(), 1);
    assert_eq!(tracker.by_category(GoalCategory::Growth).len(), 1);
    assert!(tracker.by_category(GoalCategory::Engagement).is_empty());
}
