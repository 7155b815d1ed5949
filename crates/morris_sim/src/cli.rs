//! Command-line interface for morris_sim.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Three Men's Morris - bot matches and interactive play
#[derive(Parser, Debug)]
#[command(name = "morris_sim")]
#[command(about = "Three Men's Morris simulator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run bot-vs-bot matches and report the tally
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Base RNG seed; omitted means OS entropy
        #[arg(short, long)]
        seed: Option<u64>,

        /// Abort a game as drawn after this many half-moves
        #[arg(long, default_value = "200")]
        max_plies: u32,

        /// Write one JSON record per game to this file
        #[arg(short, long)]
        record: Option<PathBuf>,
    },

    /// Play against the bot in the terminal
    Play {
        /// Bot RNG seed; omitted means OS entropy
        #[arg(short, long)]
        seed: Option<u64>,

        /// Let the bot place first
        #[arg(long)]
        bot_first: bool,
    },
}
