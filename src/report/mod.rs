//! Dashboard report assembly.
//!
//! Combines goal summaries, sales KPIs, period comparisons and allocation
//! breakdowns for a reference date into one serializable snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::comparison::{month_over_month, ComparisonMode, MonthlySales, PeriodComparison};
use crate::goals::{GoalSummary, GoalTracker};
use crate::metrics::{breakdown, SliceShare, Trend};
use crate::storage::{Allocation, AppConfig};

/// Change at a single period of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointChange {
    pub label: String,
    pub current: f64,
    /// `None` past the end of the previous series
    pub previous: Option<f64>,
    pub change: f64,
}

/// Evaluated period comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub mode: ComparisonMode,
    pub current_label: String,
    pub previous_label: String,
    pub current_total: f64,
    pub previous_total: f64,
    pub overall_change: f64,
    pub trend: Trend,
    pub points: Vec<PointChange>,
}

impl ComparisonReport {
    pub fn from_comparison(comparison: &PeriodComparison) -> Self {
        let changes = comparison.changes();
        let (current_total, previous_total) = comparison.totals();

        let points = comparison
            .current
            .data
            .iter()
            .zip(&changes.pointwise)
            .enumerate()
            .map(|(index, (&current, &change))| PointChange {
                label: comparison.time_label(index),
                current,
                previous: comparison.previous.data.get(index).copied(),
                change,
            })
            .collect();

        Self {
            mode: comparison.mode,
            current_label: comparison.current.label.clone(),
            previous_label: comparison.previous.label.clone(),
            current_total,
            previous_total,
            overall_change: changes.overall,
            trend: changes.trend(),
            points,
        }
    }
}

/// Month-over-month sales KPIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiReport {
    /// Latest reported month
    pub month: String,
    /// Month it is compared against
    pub previous_month: String,
    pub revenue: f64,
    pub orders: f64,
    pub revenue_growth: f64,
    pub orders_growth: f64,
    pub trend: Trend,
}

impl KpiReport {
    /// `None` unless at least two months have been reported.
    pub fn from_sales(sales: &[MonthlySales]) -> Option<Self> {
        let growth = month_over_month(sales)?;

        Some(Self {
            month: growth.latest.month.clone(),
            previous_month: growth.previous.month.clone(),
            revenue: growth.latest.revenue,
            orders: growth.latest.orders,
            revenue_growth: growth.revenue_growth,
            orders_growth: growth.orders_growth,
            trend: growth.trend(),
        })
    }
}

/// Evaluated share-of-total breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    pub name: String,
    pub total: f64,
    pub shares: Vec<SliceShare>,
}

impl AllocationReport {
    pub fn from_allocation(allocation: &Allocation) -> Self {
        Self {
            name: allocation.name.clone(),
            total: allocation.slices.iter().map(|s| s.value).sum(),
            shares: breakdown(&allocation.slices),
        }
    }
}

/// Snapshot of everything the dashboard displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Reference date the report was computed for
    pub generated_for: NaiveDate,
    /// Currency symbol for monetary values
    pub currency: String,
    pub goals: Vec<GoalSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpis: Option<KpiReport>,
    pub comparisons: Vec<ComparisonReport>,
    pub allocations: Vec<AllocationReport>,
}

impl DashboardReport {
    /// Build a report from configuration as seen on `today`.
    pub fn build(config: &AppConfig, today: NaiveDate) -> Self {
        let tracker = GoalTracker::from_goals(config.goals.clone());
        let goals = tracker.summaries(today);

        for summary in goals.iter().filter(|s| s.progress.is_none()) {
            tracing::warn!(id = %summary.id, title = %summary.title, "Goal progress unavailable");
        }

        let kpis = KpiReport::from_sales(&config.sales);

        let comparisons = config
            .comparisons
            .iter()
            .map(ComparisonReport::from_comparison)
            .collect();

        let allocations = config
            .allocations
            .iter()
            .map(AllocationReport::from_allocation)
            .collect();

        tracing::debug!(%today, goals = goals.len(), "Built dashboard report");

        Self {
            generated_for: today,
            currency: config.settings.currency.clone(),
            goals,
            kpis,
            comparisons,
            allocations,
        }
    }

    /// Goals that are overdue or due soon.
    pub fn goals_needing_attention(&self) -> Vec<&GoalSummary> {
        self.goals
            .iter()
            .filter(|g| g.deadline_status.needs_attention())
            .collect()
    }

    /// Comparisons with those of `selected` mode moved to the front.
    pub fn comparisons_selected_first(&self, selected: ComparisonMode) -> Vec<&ComparisonReport> {
        let mut ordered: Vec<&ComparisonReport> = self.comparisons.iter().collect();
        // Stable, so the configured order is kept otherwise
        ordered.sort_by_key(|c| c.mode != selected);
        ordered
    }

    /// Comparison for a mode, if present.
    pub fn comparison(&self, mode: ComparisonMode) -> Option<&ComparisonReport> {
        self.comparisons.iter().find(|c| c.mode == mode)
    }
}
