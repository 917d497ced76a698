use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Epimode epidemic time-series mode analysis.
#[derive(Parser)]
#[command(
    name = "epimode",
    version,
    about = "Empirical mode decomposition and Hilbert spectral analysis of epidemic time series"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Decompose a signal and compute its Hilbert spectrum.
    Analyze(AnalyzeArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to a plain-text file of samples.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Name to store the signal under (defaults to the file stem).
    #[arg(short, long)]
    pub name: Option<String>,

    /// Override the sampling interval from config.
    #[arg(long)]
    pub dt: Option<f64>,

    /// Path to TOML configuration file (e.g. `epimode.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path for the JSON result bundle.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
