use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "adaudit",
    version,
    about = "Scores ad-account audit reports and surfaces what to fix first"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Full dashboard: overall grade, platform breakdown, top issues, quick wins
    Audit(RunArgs),
    /// Write a default adaudit.toml into the current directory
    Init(InitArgs),
    /// Detail view for a single platform (google, meta, linkedin, tiktok, microsoft)
    Platform(PlatformArgs),
    /// Top issues across all platforms
    Issues(RunArgs),
    /// Quick wins across all platforms
    Wins(RunArgs),
    /// All failed and warning checks grouped by severity
    Plan(RunArgs),
    /// Current vs recommended budget allocation
    Budget(RunArgs),
    /// Performance metrics against industry benchmarks
    Benchmarks(RunArgs),
    /// Creative health alerts
    Creative(RunArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    #[arg(long)]
    pub report: Option<PathBuf>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PlatformArgs {
    /// Platform identifier as it appears in the report
    pub id: String,
    #[command(flatten)]
    pub run: RunArgs,
}
