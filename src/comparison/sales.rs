//! Monthly sales series and the month-over-month KPIs derived from it.

use serde::{Deserialize, Serialize};

use crate::metrics::{percent_change, Trend};

/// Revenue and order count for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub orders: f64,
}

impl MonthlySales {
    pub fn new(month: impl Into<String>, revenue: f64, orders: f64) -> Self {
        Self {
            month: month.into(),
            revenue,
            orders,
        }
    }

    /// Whether anything was recorded for the month.
    pub fn is_reported(&self) -> bool {
        self.revenue != 0.0 || self.orders != 0.0
    }

    /// Sample year of sales. The last two months have not been reported yet.
    pub fn sample_year() -> Vec<MonthlySales> {
        [
            ("Jan", 125_000.0, 840.0),
            ("Feb", 140_000.0, 952.0),
            ("Mar", 150_000.0, 1_023.0),
            ("Apr", 175_000.0, 1_142.0),
            ("May", 185_000.0, 1_276.0),
            ("Jun", 190_000.0, 1_321.0),
            ("Jul", 195_000.0, 1_362.0),
            ("Aug", 210_000.0, 1_425.0),
            ("Sep", 215_000.0, 1_476.0),
            ("Oct", 230_000.0, 1_525.0),
            ("Nov", 0.0, 0.0),
            ("Dec", 0.0, 0.0),
        ]
        .into_iter()
        .map(|(month, revenue, orders)| MonthlySales::new(month, revenue, orders))
        .collect()
    }
}

/// Month-over-month growth of the latest reported month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesGrowth<'a> {
    pub latest: &'a MonthlySales,
    pub previous: &'a MonthlySales,
    pub revenue_growth: f64,
    pub orders_growth: f64,
}

impl SalesGrowth<'_> {
    /// Direction of revenue growth.
    pub fn trend(&self) -> Trend {
        Trend::of(self.revenue_growth)
    }
}

/// Compare the latest reported month with the month before it.
///
/// Trailing months with neither revenue nor orders count as not yet reported
/// and are skipped. Returns `None` when fewer than two months remain. A zero
/// previous month gives the 100% sentinel.
pub fn month_over_month(series: &[MonthlySales]) -> Option<SalesGrowth<'_>> {
    let latest_index = series.iter().rposition(MonthlySales::is_reported)?;
    let previous_index = latest_index.checked_sub(1)?;

    let latest = &series[latest_index];
    let previous = &series[previous_index];

    Some(SalesGrowth {
        latest,
        previous,
        revenue_growth: percent_change(latest.revenue, previous.revenue),
        orders_growth: percent_change(latest.orders, previous.orders),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_year_compares_last_reported_months() {
        let series = MonthlySales::sample_year();
        let growth = month_over_month(&series).unwrap();

        assert_eq!(growth.latest.month, "Oct");
        assert_eq!(growth.previous.month, "Sep");
        assert!((growth.revenue_growth - 15_000.0 / 215_000.0 * 100.0).abs() < 1e-9);
        assert!((growth.orders_growth - 49.0 / 1_476.0 * 100.0).abs() < 1e-9);
        assert_eq!(growth.trend(), Trend::Up);
    }

    #[test]
    fn test_zero_previous_month_is_sentinel() {
        let series = vec![
            MonthlySales::new("Jan", 0.0, 0.0),
            MonthlySales::new("Feb", 12_000.0, 80.0),
        ];
        let growth = month_over_month(&series).unwrap();

        assert_eq!(growth.revenue_growth, 100.0);
        assert_eq!(growth.orders_growth, 100.0);
    }

    #[test]
    fn test_decline_trends_down() {
        let series = vec![
            MonthlySales::new("Jan", 100.0, 10.0),
            MonthlySales::new("Feb", 75.0, 10.0),
        ];
        let growth = month_over_month(&series).unwrap();

        assert_eq!(growth.revenue_growth, -25.0);
        assert_eq!(growth.orders_growth, 0.0);
        assert_eq!(growth.trend(), Trend::Down);
    }

    #[test]
    fn test_not_enough_months() {
        assert!(month_over_month(&[]).is_none());
        assert!(month_over_month(&[MonthlySales::new("Jan", 10.0, 1.0)]).is_none());
        assert!(month_over_month(&[
            MonthlySales::new("Jan", 10.0, 1.0),
            MonthlySales::new("Feb", 0.0, 0.0),
        ])
        .is_none());
    }
}
