use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use parser_launcher::cli::{Args, setup_logging};
use parser_launcher::run_program;
use std::process;
use tracing::info;

fn main() {
    let args = Args::parse();

    if let Err(error) = setup_logging(&args) {
        eprintln!("Failed to set up logging: {:#}", error);
        process::exit(1);
    }

    // Only returns on failure or after a dry run
    match run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let configuration = args.to_configuration();
    let destination = args.config_destination()?;

    configuration
        .generate_config_file(destination.path(), destination.overwrite())
        .context("failed to generate config file")?;
    let config_path = destination.persist()?;

    info!("Parser configuration:\n{}", configuration);
    println!(
        "{} {}",
        "Config written to".bright_green(),
        config_path.display()
    );

    if args.dry_run {
        return Ok(());
    }

    let parser = args
        .parser
        .as_deref()
        .context("--parser is required unless --dry-run is set")?;

    let error = run_program(parser, &config_path);
    Err(anyhow::Error::new(error).context("failed to run the csv parser"))
}
