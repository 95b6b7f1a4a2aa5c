//! Tic Tac Toe console front end.
//!
//! The console reads `row,col` moves from a line-based input and plays
//! them against a [`GameBackend`]:
//!
//! - [`LocalBackend`] keeps the game in-process.
//! - [`RestGameClient`] plays a game held by a `tictactoe serve` instance.
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{GameConsole, LocalBackend};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let stdin = std::io::stdin();
//! let mut console = GameConsole::new(LocalBackend::new(), stdin.lock(), std::io::stdout());
//! console.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod backend;
mod console;
mod input;
mod rest_client;

pub mod cli;

pub use backend::{GameBackend, GameView, LOCAL_REJECTION, LocalBackend, MoveOutcome};
pub use console::{GameConsole, INPUT_FORMAT_MESSAGE, render_board};
pub use input::{InputError, parse_coordinates};
pub use rest_client::RestGameClient;
