//! Config file generation.
//!
//! Renders a validated [`ParserConfiguration`] into the `key = value`
//! format the external parser reads, and writes it to disk under an
//! explicit overwrite policy.

use crate::config::{ParserConfiguration, parent_dir};
use crate::constants::{PARSER_CONFIG_BUFFER_SIZE, PARSER_MAX_PATH_LEN, keys};
use crate::error::{LauncherError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

impl ParserConfiguration {
    /// Render the config file contents.
    ///
    /// Only the maximum size of the output field is written; the parser
    /// has no key for its minimum.
    pub fn render(&self) -> Result<String> {
        let source = quoted_path(keys::SOURCE, &self.input_path)?;
        let dest = quoted_path(keys::DEST, &self.output_path)?;

        let lines = [
            (keys::MIN_FIELD_SIZE, self.input_field.min_size.to_string()),
            (keys::MAX_FIELD_SIZE, self.input_field.max_size.to_string()),
            (keys::OUTPUT_FIELD_SIZE, self.output_field.max_size.to_string()),
            (keys::EOL_FLAG, self.end_of_line.flag().to_string()),
            (keys::TILE_WIDTH, self.tile_width.to_string()),
            (keys::TILE_HEIGHT, self.tile_height.to_string()),
            (keys::SOURCE, source),
            (keys::DEST, dest),
        ];

        let mut rendered = String::new();
        for (key, value) in lines {
            rendered.push_str(key);
            rendered.push_str(" = ");
            rendered.push_str(&value);
            rendered.push('\n');
        }

        if rendered.len() >= PARSER_CONFIG_BUFFER_SIZE {
            return Err(LauncherError::ConfigTooLarge {
                size: rendered.len(),
                limit: PARSER_CONFIG_BUFFER_SIZE,
            });
        }

        Ok(rendered)
    }

    /// Validate, then write the config file to `destination`.
    ///
    /// An existing destination is only replaced when `overwrite` is set.
    /// Nothing is written unless validation passes.
    pub fn generate_config_file(&self, destination: &Path, overwrite: bool) -> Result<()> {
        let report = self.validate();
        if report.is_invalid() {
            println!("Invalid configuration.");
            return Err(LauncherError::InvalidConfiguration {
                violations: report.into_violations(),
            });
        }

        check_destination(destination, overwrite)?;

        let contents = self.render()?;
        write_config(destination, &contents)?;

        info!(
            "Wrote parser config to {} ({} bytes)",
            destination.display(),
            contents.len()
        );
        Ok(())
    }
}

/// Apply the overwrite policy and make sure the file can be created
fn check_destination(destination: &Path, overwrite: bool) -> Result<()> {
    if destination.exists() {
        println!("destination file already exists");
        if !overwrite {
            return Err(LauncherError::DestinationExists {
                path: destination.to_path_buf(),
            });
        }
        warn!("Overwriting existing file {}", destination.display());
        return Ok(());
    }

    let parent = parent_dir(destination);
    if !parent.exists() {
        println!("destination file direct parent does not exist");
        return Err(LauncherError::DestinationParentMissing {
            path: destination.to_path_buf(),
        });
    }
    if !parent.is_dir() {
        println!("destination file direct parent is not a directory");
        return Err(LauncherError::DestinationParentNotDirectory {
            path: destination.to_path_buf(),
        });
    }

    Ok(())
}

/// Write and sync; any I/O failure is reported as a write failure
fn write_config(destination: &Path, contents: &str) -> Result<()> {
    let attempt = || -> std::io::Result<()> {
        let file = File::create(destination)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(())
    };

    attempt().map_err(|source| {
        println!("failed to open file for writing");
        debug!("Write to {} failed: {}", destination.display(), source);
        LauncherError::write_failed(destination, source)
    })
}

/// Quote a path for the parser, which reads up to the next `"` on the line
fn quoted_path(key: &'static str, path: &Path) -> Result<String> {
    let text = path.to_str().ok_or_else(|| LauncherError::UnrepresentablePath {
        key,
        reason: format!("{} is not valid UTF-8", path.display()),
    })?;

    if let Some(bad) = text.chars().find(|c| matches!(c, '"' | '\n' | '\r')) {
        return Err(LauncherError::UnrepresentablePath {
            key,
            reason: format!("path contains {bad:?}"),
        });
    }

    if text.len() >= PARSER_MAX_PATH_LEN {
        return Err(LauncherError::UnrepresentablePath {
            key,
            reason: format!(
                "path is {} bytes, the parser accepts fewer than {}",
                text.len(),
                PARSER_MAX_PATH_LEN
            ),
        });
    }

    Ok(format!("\"{text}\""))
}
