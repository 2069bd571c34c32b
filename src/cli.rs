use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::aggregation::Board;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fitness challenge leaderboard dashboard")]
pub struct Cli {
    /// Path to the challenge config file
    #[arg(short, long, global = true, default_value = "challenge.toml")]
    pub config: PathBuf,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the dashboard API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print the whole dashboard to the terminal
    Report {
        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Print a single leaderboard
    Leaderboard {
        #[arg(value_enum)]
        board: Board,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
