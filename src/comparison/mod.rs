//! Period comparison module (month over month, quarter over quarter, year
//! over year) and the monthly sales KPIs.

pub mod period;
pub mod sales;

pub use period::{ComparisonMode, PeriodComparison, PeriodSeries};
pub use sales::{month_over_month, MonthlySales, SalesGrowth};
