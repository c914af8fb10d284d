//! Share-of-total breakdowns (asset allocation, sales by region or channel).

use serde::{Deserialize, Serialize};

/// Percentage each value contributes to the total.
///
/// A zero total yields all zeros.
pub fn share_of_total(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|value| value / total * 100.0).collect()
}

/// A labelled component of a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A slice together with its share of the breakdown total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceShare {
    pub label: String,
    pub value: f64,
    pub percentage: f64,
}

/// Compute shares for labelled slices, preserving order.
pub fn breakdown(slices: &[Slice]) -> Vec<SliceShare> {
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    slices
        .iter()
        .zip(share_of_total(&values))
        .map(|(slice, percentage)| SliceShare {
            label: slice.label.clone(),
            value: slice.value,
            percentage,
        })
        .collect()
}
