//! Recoil CLI
//!
//! Replays scripted pull gestures against a headless refresh control and
//! checks refresh configuration files.

mod replay;
mod trace;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use recoil_refresh::RefreshConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::replay::Replay;
use crate::trace::Trace;

#[derive(Parser)]
#[command(name = "recoil")]
#[command(about = "Replay pull-to-refresh gestures against a headless control")]
#[command(version)]
struct Cli {
    /// Verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a gesture trace and print every callback
    Replay {
        /// Trace file (TOML)
        trace: PathBuf,

        /// Refresh configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate a refresh configuration and print the effective values
    CheckConfig {
        /// Refresh configuration (TOML)
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Replay { trace, config } => cmd_replay(&trace, config.as_deref()),
        Commands::CheckConfig { config } => cmd_check_config(&config),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path) -> Result<RefreshConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    RefreshConfig::from_toml_str(&content)
        .with_context(|| format!("Invalid refresh config {}", path.display()))
}

fn cmd_replay(trace_path: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => RefreshConfig::default(),
    };
    let trace = Trace::load(trace_path)?;

    tracing::info!(
        "Replaying {} steps from {}",
        trace.steps.len(),
        trace_path.display()
    );

    let report = Replay::new(config)?.run(&trace);
    for line in &report.lines {
        println!("{line}");
    }
    println!(
        "{} transitions, final state {}",
        report.transitions, report.final_state
    );
    Ok(())
}

fn cmd_check_config(path: &Path) -> Result<()> {
    let config = load_config(path)?;
    tracing::info!("{} is valid", path.display());
    print!("{}", config.to_toml()?);
    Ok(())
}
