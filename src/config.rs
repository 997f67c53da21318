//! Parser configuration and validation.
//!
//! Holds every parameter the external parser reads from its config file,
//! and the validation pass that must succeed before the file is written.

use crate::constants::{
    DEFAULT_MAX_FIELD_SIZE, DEFAULT_MIN_FIELD_SIZE, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
    FIELD_SIZE_BOUNDS, TILE_BOUNDS,
};
use crate::field::{Field, check_bounds};
use crate::models::EndOfLine;
use crate::validation::{ValidationReport, Violation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything the external parser needs to tile one CSV file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfiguration {
    /// Size range of fields in the source file
    pub input_field: Field,

    /// Size range of fields written to the tiles
    pub output_field: Field,

    pub tile_width: i64,
    pub tile_height: i64,

    /// Source CSV file, must exist
    pub input_path: PathBuf,

    /// Destination directory, may be created later by the parser
    pub output_path: PathBuf,

    pub end_of_line: EndOfLine,
}

impl Default for ParserConfiguration {
    fn default() -> Self {
        let field = Field::new(DEFAULT_MIN_FIELD_SIZE, DEFAULT_MAX_FIELD_SIZE);
        Self {
            input_field: field,
            output_field: field,
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            input_path: PathBuf::new(),
            output_path: PathBuf::new(),
            end_of_line: EndOfLine::Auto,
        }
    }
}

impl ParserConfiguration {
    /// Create a configuration with parser defaults for everything but the paths
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn with_input_field(mut self, field: Field) -> Self {
        self.input_field = field;
        self
    }

    pub fn with_output_field(mut self, field: Field) -> Self {
        self.output_field = field;
        self
    }

    /// Set tile width and height
    pub fn with_tile_size(mut self, width: i64, height: i64) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    pub fn with_end_of_line(mut self, end_of_line: EndOfLine) -> Self {
        self.end_of_line = end_of_line;
        self
    }

    /// Run every check and report all failures.
    ///
    /// No check short-circuits another: a config with several problems
    /// prints one diagnostic per problem. The end-of-line variant is
    /// enforced by its type, so an unrecognized value is rejected when it
    /// is parsed (see [`EndOfLine::from_str`](std::str::FromStr)).
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        let (field_low, field_high) = FIELD_SIZE_BOUNDS;
        let (tile_low, tile_high) = TILE_BOUNDS;

        self.input_field
            .validate(field_low, field_high, "input field", &mut report);
        self.output_field
            .validate(field_low, field_high, "output field", &mut report);
        check_bounds(self.tile_width, tile_low, tile_high, "tile width", &mut report);
        check_bounds(self.tile_height, tile_low, tile_high, "tile height", &mut report);
        check_input_path(&self.input_path, &mut report);
        check_output_path(&self.output_path, &mut report);

        debug!(
            "Validated configuration for {}: {} problem(s)",
            self.input_path.display(),
            report.violations().len()
        );

        report
    }
}

impl fmt::Display for ParserConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Tiles are of size {} x {}, file is of type {}",
            self.tile_width,
            self.tile_height,
            self.end_of_line.describe()
        )?;
        writeln!(
            f,
            "Fields have a size going between {} and {}, written on {} bytes.",
            self.input_field.min_size, self.input_field.max_size, self.output_field.max_size
        )?;
        writeln!(f, "source file has path `{}`", self.input_path.display())?;
        write!(
            f,
            "destination directory has path `{}`",
            self.output_path.display()
        )
    }
}

/// Input must be an existing regular file
fn check_input_path(path: &Path, report: &mut ValidationReport) -> bool {
    let path = current_dir_if_empty(path);
    if !path.exists() {
        report.record(Violation::InputPathMissing {
            path: path.to_path_buf(),
        });
        return true;
    }
    if !path.is_file() {
        report.record(Violation::InputPathNotFile {
            path: path.to_path_buf(),
        });
        return true;
    }
    false
}

/// Output must be an existing directory, or a missing path whose parent is one
fn check_output_path(path: &Path, report: &mut ValidationReport) -> bool {
    let path = current_dir_if_empty(path);
    if path.exists() {
        if !path.is_dir() {
            report.record(Violation::OutputPathNotDirectory {
                path: path.to_path_buf(),
            });
            return true;
        }
        return false;
    }

    let parent = parent_dir(path);
    if !parent.exists() {
        report.record(Violation::OutputParentMissing {
            path: path.to_path_buf(),
        });
        return true;
    }
    if !parent.is_dir() {
        report.record(Violation::OutputParentNotDirectory {
            path: path.to_path_buf(),
        });
        return true;
    }
    false
}

/// Direct parent of `path`; a bare file name lives in the current directory
pub(crate) fn parent_dir(path: &Path) -> &Path {
    match current_dir_if_empty(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        Some(_) => Path::new("."),
        None => current_dir_if_empty(path),
    }
}

/// An empty path names the current directory
fn current_dir_if_empty(path: &Path) -> &Path {
    if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    }
}
