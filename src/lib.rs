//! Parser Launcher Library
//!
//! Prepares a run of the external CSV tile parser: a configuration is
//! validated, written as the `key = value` config file the parser reads,
//! and the current process is then replaced by the parser.
//!
//! This library provides tools for:
//! - Validating field sizes, tile dimensions and source/destination paths
//! - Reporting every validation problem in a single pass
//! - Writing the config file under an explicit overwrite policy
//! - Handing control to the parser executable

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod launcher;
pub mod models;
pub mod serializer;
pub mod validation;

// Re-export commonly used types
pub use config::ParserConfiguration;
pub use error::{LauncherError, Result};
pub use field::{Field, check_bounds};
pub use launcher::run_program;
pub use models::EndOfLine;
pub use validation::{ValidationReport, Violation, ViolationKind};
