//! Bizdash - Business Dashboard Metrics
//!
//! The computational core of a business analytics dashboard: goal progress,
//! period-over-period comparisons, share-of-total breakdowns and report export.
//! Rendering, animation and data simulation are left to the presentation layer.

pub mod comparison;
pub mod export;
pub mod goals;
pub mod metrics;
pub mod report;
pub mod storage;

// Re-export commonly used types
pub use comparison::{ComparisonMode, MonthlySales, PeriodComparison, PeriodSeries};
pub use export::{ExportError, ExportFormat, ExportSection};
pub use goals::{Goal, GoalCategory, GoalError, GoalTracker};
pub use metrics::{
    days_remaining, percent_change, progress_ratio, total_and_growth, GrowthSummary, MetricsError,
};
pub use report::{DashboardReport, KpiReport};
pub use storage::{AppConfig, ConfigError};
