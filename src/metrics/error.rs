//! Metrics error types.

use thiserror::Error;

/// Errors that can occur during metric calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// A ratio was requested against a zero denominator.
    #[error("Division by zero: target must be nonzero")]
    DivisionByZero,
}

/// Result type for metric calculations.
pub type MetricsResult<T> = Result<T, MetricsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_by_zero_message() {
        let err = MetricsError::DivisionByZero;
        assert!(err.to_string().contains("Division by zero"));
    }
}
