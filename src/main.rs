//! Tic-tac-toe - terminal UI and replay tool.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use strictly_tictactoe::{Config, replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play => run_tui(&config),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log().filter()))
}

/// Run the terminal UI, logging to a file so the screen stays clean.
fn run_tui(config: &Config) -> Result<()> {
    let log_path = config.log().file();
    let log_file = std::fs::File::create(log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(config = ?config, "Configuration loaded");
    tui::run(config.theme())
}

/// Replay a move list and print the final board.
fn run_replay(config: &Config, moves: &[usize], json: bool) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    let report = replay(moves);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}
