//! Handoff to the external parser.
//!
//! On Unix the current process image is replaced with the parser, so a
//! successful call never returns. Other platforms have no image
//! replacement: the parser is spawned, waited on, and this process exits
//! with its status. In both cases control never comes back on success.

use crate::error::LauncherError;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

#[cfg(unix)]
use std::os::unix::process::CommandExt;

/// Replace this process with `executable`, passing `config_path` as its
/// only argument.
///
/// Returns only when the handoff failed (missing executable, missing
/// execute permission, ...). The config file is left in place.
pub fn run_program(executable: &Path, config_path: &Path) -> LauncherError {
    info!(
        "Handing over to {} with config {}",
        executable.display(),
        config_path.display()
    );

    let mut command = Command::new(resolve_executable(executable));
    #[cfg(unix)]
    command.arg0(executable);
    command.arg(config_path);

    let source = handoff(&mut command);
    let error = LauncherError::launch(executable, source);
    println!("{error}");
    error
}

/// Pin a bare program name to the working directory; `Command` would
/// otherwise look it up on `PATH`.
fn resolve_executable(executable: &Path) -> PathBuf {
    if executable.is_relative() && executable.components().count() == 1 {
        Path::new(".").join(executable)
    } else {
        executable.to_path_buf()
    }
}

#[cfg(unix)]
fn handoff(command: &mut Command) -> std::io::Error {
    command.exec()
}

#[cfg(not(unix))]
fn handoff(command: &mut Command) -> std::io::Error {
    match command.status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(error) => error,
    }
}
