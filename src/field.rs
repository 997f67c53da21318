//! Field size descriptors.
//!
//! A [`Field`] describes the size range, in bytes, of the numeric fields
//! in a CSV file. Validation checks both sizes against caller supplied
//! bounds and that the range is not inverted.

use crate::validation::{ValidationReport, Violation};
use serde::{Deserialize, Serialize};

/// Minimum and maximum size of a field in bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub min_size: i64,
    pub max_size: i64,
}

impl Field {
    pub fn new(min_size: i64, max_size: i64) -> Self {
        Self { min_size, max_size }
    }

    /// Check both sizes against `[low, high]` and that `min_size <= max_size`.
    ///
    /// Returns true when any check failed. Every failure is recorded.
    pub fn validate(
        &self,
        low: i64,
        high: i64,
        label: &str,
        report: &mut ValidationReport,
    ) -> bool {
        let mut invalid = false;

        if check_bounds(
            self.min_size,
            low,
            high,
            &format!("{label} minimum size in bytes"),
            report,
        ) {
            invalid = true;
        }

        if check_bounds(
            self.max_size,
            low,
            high,
            &format!("{label} maximum size in bytes"),
            report,
        ) {
            invalid = true;
        }

        if self.min_size > self.max_size {
            report.record(Violation::MinExceedsMax {
                label: label.to_string(),
            });
            invalid = true;
        }

        invalid
    }
}

/// Check `low <= value <= high`, recording one violation per failed side.
///
/// Returns true when the value is out of range.
pub fn check_bounds(
    value: i64,
    low: i64,
    high: i64,
    label: &str,
    report: &mut ValidationReport,
) -> bool {
    let mut invalid = false;

    if value < low {
        report.record(Violation::BelowMinimum {
            label: label.to_string(),
            bound: low,
        });
        invalid = true;
    }

    if value > high {
        report.record(Violation::AboveMaximum {
            label: label.to_string(),
            bound: high,
        });
        invalid = true;
    }

    invalid
}
