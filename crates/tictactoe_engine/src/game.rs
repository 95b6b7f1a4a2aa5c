//! Game engine for tic-tac-toe.

use crate::action::{Move, MoveError, OutOfBounds};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Cell, GameState, GameStatus, Player};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns a [`GameState`] and is the only thing allowed to change it.
/// Read access hands out references or copies; writes go through
/// [`Game::play`] / [`Game::play_at`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the player whose turn it is.
    ///
    /// After the game ends this stays on the player who made the final move.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the moves played so far, oldest first.
    pub fn moves(&self) -> &[Move] {
        self.state.moves()
    }

    /// Returns the most recent move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.state.moves().last().copied()
    }

    /// Returns a snapshot of the board.
    ///
    /// The copy is independent: changing it does not affect the game.
    pub fn board(&self) -> Board {
        *self.state.board()
    }

    /// Reads the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] when either coordinate is outside `0..=2`.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, OutOfBounds> {
        self.state.board().cell(row, col)
    }

    /// Attempts to place the current player's mark at `(row, col)`.
    ///
    /// Checks, in order: the game is still in progress, the coordinates are
    /// on the board, the cell is empty.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] naming the first failed check. The game is
    /// unchanged in that case.
    #[instrument(skip(self), fields(player = ?self.state.current_player()))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<Move, MoveError> {
        self.ensure_in_progress()?;
        let pos = Position::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.place(pos)
    }

    /// Attempts to place the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] or [`MoveError::CellOccupied`]; the
    /// game is unchanged in that case.
    #[instrument(skip(self), fields(player = ?self.state.current_player()))]
    pub fn play_at(&mut self, pos: Position) -> Result<Move, MoveError> {
        self.ensure_in_progress()?;
        self.place(pos)
    }

    /// Discards the current game and starts over with X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves = self.state.moves().len(), "Restarting game");
        self.state = GameState::new();
    }

    fn ensure_in_progress(&self) -> Result<(), MoveError> {
        match self.state.status() {
            GameStatus::InProgress => Ok(()),
            status => {
                debug!(?status, "Move rejected, game is over");
                Err(MoveError::GameOver(status))
            }
        }
    }

    fn place(&mut self, pos: Position) -> Result<Move, MoveError> {
        if !self.state.board().is_empty(pos) {
            debug!(position = %pos, "Move rejected, cell occupied");
            return Err(MoveError::CellOccupied(pos));
        }

        let mv = self.state.record_move(pos);
        self.update_status(mv.player());

        debug!(
            sequence = mv.sequence(),
            position = %pos,
            status = ?self.state.status(),
            "Move applied"
        );
        Ok(mv)
    }

    /// Updates game status after `mover` placed a mark.
    fn update_status(&mut self, mover: Player) {
        let board = self.state.board();
        if let Some(winner) = rules::check_winner(board) {
            debug_assert_eq!(winner, mover);
            info!(%winner, board = %board.display(), "Game won");
            self.state.set_status(GameStatus::won_by(winner));
        } else if rules::is_full(board) {
            info!(board = %board.display(), "Game drawn");
            self.state.set_status(GameStatus::Draw);
        } else {
            self.state.toggle_player();
        }
    }
}
