//! Metrics module: pure arithmetic behind dashboard cards, progress bars and
//! trend badges.
//!
//! Nothing here performs I/O, reads the clock or keeps state; every function
//! returns the same output for the same input.

pub mod change;
pub mod deadline;
pub mod error;
pub mod progress;
pub mod share;

pub use change::{percent_change, total_and_growth, GrowthSummary, Trend, ZERO_BASELINE_CHANGE};
pub use deadline::{days_remaining, days_remaining_at, DeadlineStatus, DUE_SOON_DAYS};
pub use error::{MetricsError, MetricsResult};
pub use progress::{progress_ratio, ProgressBand, MAX_PROGRESS};
pub use share::{breakdown, share_of_total, Slice, SliceShare};
