//! CLI entrypoint for survey-tally
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tally_infrastructure::{ConfigLoader, FileConfig};
use tally_presentation::{Cli, ConsoleProgress, MenuSession, OutputConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    info!("Starting survey-tally");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        let config = load_config(&cli)?;
        println!();
        println!("Effective configuration:");
        print!("{}", config.to_toml().context("Failed to render configuration")?);
        return Ok(());
    }

    let file_config = load_config(&cli)?;
    for issue in file_config.validate() {
        warn!("{}", issue.message);
    }

    let output = output_config(&file_config)
        .with_format(cli.format.map(Into::into))
        .with_color_disabled(cli.no_color);
    if !output.color {
        colored::control::set_override(false);
    }
    info!("Publishing results as {}", output.format);

    // === Dependency Injection ===
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = MenuSession::new(stdin.lock(), stdout.lock(), &output);
    if cli.progress {
        session = session.with_progress(Box::new(ConsoleProgress::new()));
    }

    session.run().context("Menu session failed")?;
    Ok(())
}

/// Load configuration honoring `--no-config` and `--config`
fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        info!("Ignoring configuration files");
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")
}

fn output_config(file_config: &FileConfig) -> OutputConfig {
    let (style, _) = file_config.report.to_report_style();
    OutputConfig {
        format: file_config.output.format.unwrap_or_default(),
        color: file_config.output.color,
        style,
    }
}
