//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe - play in the terminal or serve games over HTTP
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe for the terminal and the web", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play a game in this terminal
    Play {
        /// Game server URL (HTTP). If not provided, plays in-process.
        #[arg(long)]
        server_url: Option<String>,
    },

    /// Run the HTTP game server
    Serve {
        /// Path to a TOML server config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides the config file)
        #[arg(long, env = "TICTACTOE_HOST")]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long, env = "TICTACTOE_PORT")]
        port: Option<u16>,
    },
}
