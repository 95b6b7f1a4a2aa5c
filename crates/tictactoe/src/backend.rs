//! Where the console's game lives: in-process or on a server.

use anyhow::Result;
use async_trait::async_trait;
use tictactoe_engine::{Board, Game, GameStatus, Player};
use tictactoe_server::{GameResponse, UnknownMark};
use tracing::{debug, instrument};

/// Message shown when the local engine refuses a move.
pub const LOCAL_REJECTION: &str = "Invalid move. Position may be occupied or out of bounds.";

/// Everything the console needs to draw a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    /// Board snapshot.
    pub board: Board,
    /// Player to move.
    pub current_player: Player,
    /// Game status.
    pub status: GameStatus,
    /// Number of moves played.
    pub moves_made: usize,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        Self {
            board: game.board(),
            current_player: game.current_player(),
            status: game.status(),
            moves_made: game.moves().len(),
        }
    }
}

impl TryFrom<&GameResponse> for GameView {
    type Error = UnknownMark;

    fn try_from(response: &GameResponse) -> Result<Self, Self::Error> {
        let board = response.decode_board()?;
        Ok(Self {
            board,
            current_player: response.current_player,
            status: response.status.into(),
            // One move per occupied cell
            moves_made: board.occupied(),
        })
    }
}

/// Result of asking a backend to place a mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed for this player.
    Placed(Player),
    /// The move was refused; the message explains why.
    Rejected(String),
}

/// A game the console can show and play.
#[async_trait]
pub trait GameBackend: Send + Sync {
    /// Current state of the game.
    async fn view(&self) -> Result<GameView>;

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Refused moves are `Ok(MoveOutcome::Rejected(_))`; `Err` is reserved
    /// for failures of the backend itself.
    async fn play(&mut self, row: usize, col: usize) -> Result<MoveOutcome>;

    /// Abandons the current game and starts a fresh one.
    async fn new_game(&mut self) -> Result<()>;
}

/// Plays against an in-process [`Game`].
#[derive(Debug, Clone, Default)]
pub struct LocalBackend {
    game: Game,
}

impl LocalBackend {
    /// Creates a backend holding a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }
}

#[async_trait]
impl GameBackend for LocalBackend {
    async fn view(&self) -> Result<GameView> {
        Ok(GameView::from(&self.game))
    }

    #[instrument(skip(self))]
    async fn play(&mut self, row: usize, col: usize) -> Result<MoveOutcome> {
        match self.game.play(row, col) {
            Ok(mv) => Ok(MoveOutcome::Placed(mv.player())),
            Err(err) => {
                debug!(error = %err, "Local move refused");
                Ok(MoveOutcome::Rejected(LOCAL_REJECTION.to_string()))
            }
        }
    }

    async fn new_game(&mut self) -> Result<()> {
        self.game.restart();
        Ok(())
    }
}
