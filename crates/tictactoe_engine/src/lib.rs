//! Tic-tac-toe game engine.
//!
//! Holds a 3x3 board, the player to move, the game status and the ordered
//! list of moves. [`Game::play`] is the only way to change a game; every
//! refusal comes back as a [`MoveError`] and leaves the game untouched.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.play(row, col).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::XWon);
//! assert_eq!(game.status().winner(), Some(Player::X));
//! assert!(game.play(2, 2).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError, OutOfBounds};
pub use game::Game;
pub use position::Position;
pub use types::{Board, Cell, GameState, GameStatus, Player};
