//! APD Sensors
//!
//! CLI that reports host sensor values, or a single sensor by path while it
//! is being developed.

mod commands;

use anyhow::{Context, Result};
use apd_sensors::SensorsConfig;
use clap::{Parser, Subcommand};
use commands::ReturnCode;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sensors")]
#[command(about = "Displays the values of host sensors")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Displays the values of the sensors
    Show,
    /// Displays the values of a specific sensor in development
    Develop {
        /// Sensor path, e.g. apd.sensors:CPULoad
        #[arg(value_name = "path")]
        path: String,
    },
    /// Prints the effective configuration
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = SensorsConfig::load_or_default(cli.config.as_ref())
        .context("Failed to load configuration")?;
    if let Some(path) = &cli.config {
        debug!("Loaded configuration from: {}", path.display());
    }

    let code = match cli.command {
        Commands::Show => handle_show(&config)?,
        Commands::Develop { path } => handle_develop(&path)?,
        Commands::Config => handle_config(&config)?,
    };

    Ok(code.into())
}

fn handle_show(config: &SensorsConfig) -> Result<ReturnCode> {
    let sensors = apd_sensors::get_sensors(config);
    commands::show(&mut io::stdout().lock(), &sensors)
}

fn handle_develop(path: &str) -> Result<ReturnCode> {
    let registry = apd_sensors::registry();
    commands::develop(
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        &registry,
        path,
    )
}

fn handle_config(config: &SensorsConfig) -> Result<ReturnCode> {
    print!("{}", config.to_toml()?);
    Ok(ReturnCode::Ok)
}
