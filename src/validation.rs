//! Validation diagnostics.
//!
//! Every failed check produces a [`Violation`]. Violations are printed to
//! stdout as soon as they are recorded and kept in a [`ValidationReport`]
//! so the caller can still inspect them after the pass has finished.

use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// A single failed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Value is below the inclusive lower bound
    BelowMinimum { label: String, bound: i64 },
    /// Value is above the inclusive upper bound
    AboveMaximum { label: String, bound: i64 },
    /// Minimum size is larger than the maximum size
    MinExceedsMax { label: String },
    InputPathMissing { path: PathBuf },
    InputPathNotFile { path: PathBuf },
    OutputParentMissing { path: PathBuf },
    OutputParentNotDirectory { path: PathBuf },
    OutputPathNotDirectory { path: PathBuf },
    InvalidEndOfLine { value: String },
}

impl Violation {
    /// Coarse category, mostly useful for filtering in tests and logs
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::BelowMinimum { .. } | Violation::AboveMaximum { .. } => {
                ViolationKind::Bounds
            }
            Violation::MinExceedsMax { .. } => ViolationKind::Relation,
            Violation::InputPathMissing { .. }
            | Violation::InputPathNotFile { .. }
            | Violation::OutputParentMissing { .. }
            | Violation::OutputParentNotDirectory { .. }
            | Violation::OutputPathNotDirectory { .. } => ViolationKind::Path,
            Violation::InvalidEndOfLine { .. } => ViolationKind::Enum,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::BelowMinimum { label, bound } => {
                write!(f, "{label} must be greater than or equal to {bound}")
            }
            Violation::AboveMaximum { label, bound } => {
                write!(f, "{label} must be less than or equal to {bound}")
            }
            Violation::MinExceedsMax { label } => {
                write!(f, "{label} minimum size must be smaller than the maximum size")
            }
            Violation::InputPathMissing { path } => {
                write!(f, "Input path must exist: {}", path.display())
            }
            Violation::InputPathNotFile { path } => {
                write!(f, "Input path must point to a file: {}", path.display())
            }
            Violation::OutputParentMissing { path } => write!(
                f,
                "output path direct parent does not exist: {}",
                path.display()
            ),
            Violation::OutputParentNotDirectory { path } => write!(
                f,
                "output path direct parent must be a directory: {}",
                path.display()
            ),
            Violation::OutputPathNotDirectory { path } => write!(
                f,
                "output path exists, then it must point to a directory: {}",
                path.display()
            ),
            Violation::InvalidEndOfLine { value } => {
                write!(f, "end_of_line has an invalid value: {value:?}")
            }
        }
    }
}

/// Categories of validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Bounds,
    Relation,
    Path,
    Enum,
}

/// Collects the outcome of one validation pass
#[derive(Debug, Default, Clone)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print the diagnostic and keep it
    pub fn record(&mut self, violation: Violation) {
        println!("{violation}");
        debug!(kind = ?violation.kind(), "validation failed: {}", violation);
        self.violations.push(violation);
    }

    /// True when at least one check failed
    pub fn is_invalid(&self) -> bool {
        !self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}
