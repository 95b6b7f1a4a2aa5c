//! Move records and the errors a move attempt can produce.

use crate::position::Position;
use crate::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// A recorded move: a player placing their mark at a position.
///
/// Moves are created by the engine when a placement succeeds and are
/// never changed afterwards. Sequence numbers start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    position: Position,
    player: Player,
    sequence: u32,
}

impl Move {
    pub(crate) fn new(position: Position, player: Player, sequence: u32) -> Self {
        Self {
            position,
            player,
            sequence,
        }
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Row of the placed mark (0-2).
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Column of the placed mark (0-2).
    pub fn col(&self) -> usize {
        self.position.col()
    }

    /// Returns the player who made this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// 1-based order of this move within its game.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} -> ({},{})",
            self.sequence,
            self.player,
            self.row(),
            self.col()
        )
    }
}

/// Reason a move attempt was refused.
///
/// These are ordinary outcomes of user input; a refused move leaves the
/// game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already reached a terminal status.
    #[display("Game is already over ({_0})")]
    GameOver(GameStatus),

    /// Row or column outside `0..=2`.
    #[display("Position ({row},{col}) is out of bounds (must be 0-2)")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Position),
}

impl std::error::Error for MoveError {}

/// Coordinates outside the 3x3 board were used to read a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Coordinates ({row},{col}) are outside the board (must be 0-2)")]
pub struct OutOfBounds {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

impl std::error::Error for OutOfBounds {}
