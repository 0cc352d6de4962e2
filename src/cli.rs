use std::path::PathBuf;

use clap::Parser;

/// Product-list demo with selective state persistence.
#[derive(Debug, Parser)]
#[command(name = "stocklist", version, about)]
pub struct Cli {
    /// Config file to use instead of the platform default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// State file to use instead of the configured one.
    #[arg(long, value_name = "PATH")]
    pub state_file: Option<PathBuf>,

    /// Override the simulated fetch latency.
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Keep state in memory only; nothing is persisted.
    #[arg(long)]
    pub ephemeral: bool,
}
