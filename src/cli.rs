//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::DEFAULT_CONFIG_FILE;

/// Tic-tac-toe for two players sharing one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Play in the terminal UI
    #[default]
    Play,

    /// Apply a comma-separated list of board indices (0-8) and print the result
    Replay {
        /// Moves in play order, e.g. `0,3,1,4,2`
        #[arg(value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
