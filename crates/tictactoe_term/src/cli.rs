//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (ignored if missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Disable sounds
    #[arg(long, global = true)]
    pub mute: bool,

    /// Override the log file used by interactive play
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Pre-fill X's name
        #[arg(long)]
        x_name: Option<String>,

        /// Pre-fill O's name
        #[arg(long)]
        o_name: Option<String>,
    },

    /// Play a fixed list of cells headlessly and print the result as JSON
    Script {
        /// Cell indices (0-8), comma separated, in play order
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// X's name
        #[arg(long)]
        x_name: Option<String>,

        /// O's name
        #[arg(long)]
        o_name: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            x_name: None,
            o_name: None,
        }
    }
}
