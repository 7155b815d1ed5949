//! Three Men's Morris command-line driver.
//!
//! Runs bot-vs-bot batches or an interactive game against the bot.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod play;
mod simulate;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Simulate {
            games,
            seed,
            max_plies,
            record,
        } => simulate::run(games, seed, max_plies, record.as_deref()),
        Command::Play { seed, bot_first } => play::run(seed, bot_first),
    }
}
