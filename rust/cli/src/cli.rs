//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "arena",
    version,
    about = "Multi-player Texas Hold'em arena for pluggable bots"
)]
pub struct ArenaCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one game between the named bots
    Run {
        /// Comma-separated bot kinds, e.g. caller,raiser,baseline (2 to 10)
        #[arg(long, value_delimiter = ',', required = true)]
        bots: Vec<String>,
        /// Stop after this many hands even if several players survive
        #[arg(long)]
        hands: Option<u64>,
        /// Master seed; overrides config and environment
        #[arg(long)]
        seed: Option<u64>,
        /// Write a JSONL hand history to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Play many games and compare bot performance
    Eval {
        /// Comma-separated bot kinds (2 to 10)
        #[arg(long, value_delimiter = ',', required = true)]
        bots: Vec<String>,
        /// Number of games to play
        #[arg(long, default_value_t = 100)]
        games: u64,
        /// Hand cap per game
        #[arg(long, default_value_t = 1000)]
        hands: u64,
        /// Base seed; game i plays under seed + i
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
