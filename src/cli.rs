//! Command-line interface components.

use crate::config::ParserConfiguration;
use crate::constants::{
    DEFAULT_MAX_FIELD_SIZE, DEFAULT_MIN_FIELD_SIZE, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
    TEMP_CONFIG_SUFFIX,
};
use crate::field::Field;
use crate::models::EndOfLine;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

#[derive(Parser, Debug, Clone)]
#[command(name = "parser-launcher")]
#[command(about = "Write a validated config file for the CSV tile parser and run it")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Source CSV file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Destination directory for the tiles (may not exist yet)
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Path of the parser executable
    #[arg(short, long, value_name = "EXECUTABLE", required_unless_present = "dry_run")]
    pub parser: Option<PathBuf>,

    /// Where to write the parser config (a temporary file if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Minimum size of input fields in bytes
    #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_FIELD_SIZE)]
    pub min_field_size: i64,

    /// Maximum size of input fields in bytes
    #[arg(short = 'M', long, default_value_t = DEFAULT_MAX_FIELD_SIZE)]
    pub max_field_size: i64,

    /// Minimum size of output fields in bytes (defaults to --min-field-size)
    #[arg(long)]
    pub output_min_field_size: Option<i64>,

    /// Size of output fields in bytes (defaults to --max-field-size)
    #[arg(long)]
    pub output_field_size: Option<i64>,

    /// Width of the output tiles
    #[arg(short = 'W', long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: i64,

    /// Height of the output tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: i64,

    /// Line terminator of the source file (auto, unix, dos)
    #[arg(long, value_name = "STYLE", default_value = "auto", value_parser = parse_end_of_line)]
    pub eol: EndOfLine,

    /// Replace the config file if it already exists
    #[arg(long)]
    pub overwrite: bool,

    /// Write the config file but do not run the parser
    #[arg(long)]
    pub dry_run: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only show errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Build the parser configuration described by the arguments
    pub fn to_configuration(&self) -> ParserConfiguration {
        let output_field = Field::new(
            self.output_min_field_size.unwrap_or(self.min_field_size),
            self.output_field_size.unwrap_or(self.max_field_size),
        );

        ParserConfiguration::new(&self.input, &self.output)
            .with_input_field(Field::new(self.min_field_size, self.max_field_size))
            .with_output_field(output_field)
            .with_tile_size(self.tile_width, self.tile_height)
            .with_end_of_line(self.eol)
    }

    /// Where the config file goes.
    ///
    /// Without `--config` a temporary file is reserved; it is removed again
    /// unless [`ConfigDestination::persist`] is called.
    pub fn config_destination(&self) -> Result<ConfigDestination> {
        match &self.config {
            Some(path) => Ok(ConfigDestination::Path {
                path: path.clone(),
                overwrite: self.overwrite,
            }),
            None => {
                let file = tempfile::Builder::new()
                    .prefix("parser-")
                    .suffix(TEMP_CONFIG_SUFFIX)
                    .tempfile()
                    .context("Failed to create temporary config file")?;
                debug!("Reserved temporary config file {}", file.path().display());
                Ok(ConfigDestination::Temporary(file))
            }
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Config file location chosen on the command line
#[derive(Debug)]
pub enum ConfigDestination {
    /// Explicit `--config` path
    Path { path: PathBuf, overwrite: bool },
    /// Temporary file, deleted on drop until persisted
    Temporary(NamedTempFile),
}

impl ConfigDestination {
    pub fn path(&self) -> &Path {
        match self {
            ConfigDestination::Path { path, .. } => path,
            ConfigDestination::Temporary(file) => file.path(),
        }
    }

    /// A reserved temporary file is always overwritten
    pub fn overwrite(&self) -> bool {
        match self {
            ConfigDestination::Path { overwrite, .. } => *overwrite,
            ConfigDestination::Temporary(_) => true,
        }
    }

    /// Keep the file on disk once it has been written
    pub fn persist(self) -> Result<PathBuf> {
        match self {
            ConfigDestination::Path { path, .. } => Ok(path),
            ConfigDestination::Temporary(file) => {
                let (_file, path) = file
                    .keep()
                    .context("Failed to keep temporary config file")?;
                Ok(path)
            }
        }
    }
}

fn parse_end_of_line(value: &str) -> std::result::Result<EndOfLine, String> {
    value
        .parse::<EndOfLine>()
        .map_err(|violation| violation.to_string())
}

/// Set up structured logging on stderr; `RUST_LOG` takes precedence
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("parser_launcher={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
