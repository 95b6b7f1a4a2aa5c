//! Core domain types for tic-tac-toe.

use crate::action::{Move, OutOfBounds};
use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns true if no player has marked this cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: copying one out of a game yields an
/// independent snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from nine cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Reads the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] when either coordinate is outside `0..=2`.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, OutOfBounds> {
        Position::from_coords(row, col)
            .map(|pos| self.get(pos))
            .ok_or(OutOfBounds { row, col })
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of the game.
///
/// Once a game leaves `InProgress` it never returns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("In Progress")]
    InProgress,
    /// Player X completed a line.
    #[display("X Won")]
    XWon,
    /// Player O completed a line.
    #[display("O Won")]
    OWon,
    /// Board filled with no line completed.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Status for a game won by `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => GameStatus::XWon,
            Player::O => GameStatus::OWon,
        }
    }

    /// Returns true for `XWon`, `OWon` and `Draw`.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::XWon => Some(Player::X),
            GameStatus::OWon => Some(Player::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// Moves in the order they were played.
    moves: Vec<Move>,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            moves: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Places the current player's mark and records the move.
    ///
    /// Unchecked: callers validate through [`crate::Game::play_at`].
    pub(crate) fn record_move(&mut self, pos: Position) -> Move {
        let player = self.current_player;
        self.board.set(pos, Cell::Occupied(player));
        let mv = Move::new(pos, player, self.moves.len() as u32 + 1);
        self.moves.push(mv);
        mv
    }

    /// Hands the turn to the other player.
    pub(crate) fn toggle_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Sets the game status.
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
