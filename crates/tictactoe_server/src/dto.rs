//! JSON shapes exchanged over the REST API.

use crate::store::GameId;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tictactoe_engine::{Board, Cell, Game, GameStatus, Move, Player};

/// Wire tag for [`GameStatus`].
///
/// The mapping is an exhaustive table in both directions; parsing an
/// unrecognized tag is an error, never a silent default.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum StatusTag {
    /// Game is ongoing.
    InProgress,
    /// Player X won.
    XWins,
    /// Player O won.
    OWins,
    /// Board full, nobody won.
    Draw,
}

impl From<GameStatus> for StatusTag {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => StatusTag::InProgress,
            GameStatus::XWon => StatusTag::XWins,
            GameStatus::OWon => StatusTag::OWins,
            GameStatus::Draw => StatusTag::Draw,
        }
    }
}

impl From<StatusTag> for GameStatus {
    fn from(tag: StatusTag) -> Self {
        match tag {
            StatusTag::InProgress => GameStatus::InProgress,
            StatusTag::XWins => GameStatus::XWon,
            StatusTag::OWins => GameStatus::OWon,
            StatusTag::Draw => GameStatus::Draw,
        }
    }
}

/// A board cell string that is neither `""`, `"X"` nor `"O"`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unrecognized board mark {mark:?} at position {position}")]
pub struct UnknownMark {
    /// Offending string.
    pub mark: String,
    /// Index of the offending cell.
    pub position: usize,
}

/// Encodes a cell as `""`, `"X"` or `"O"`.
pub fn cell_to_mark(cell: Cell) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Occupied(player) => player.to_string(),
    }
}

/// Decodes a cell from `""`, `"X"` or `"O"`.
pub fn mark_to_cell(mark: &str, position: usize) -> Result<Cell, UnknownMark> {
    match mark {
        "" => Ok(Cell::Empty),
        "X" => Ok(Cell::Occupied(Player::X)),
        "O" => Ok(Cell::Occupied(Player::O)),
        other => Err(UnknownMark {
            mark: other.to_string(),
            position,
        }),
    }
}

/// Game snapshot returned by every game endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    /// Game identifier.
    pub game_id: GameId,
    /// Nine marks in row-major order (`position = row * 3 + col`).
    pub board: Vec<String>,
    /// Player to move.
    pub current_player: Player,
    /// Game status tag.
    pub status: StatusTag,
}

impl GameResponse {
    /// Maps a game to its wire shape.
    pub fn from_game(game_id: GameId, game: &Game) -> Self {
        Self {
            game_id,
            board: game.board().cells().iter().copied().map(cell_to_mark).collect(),
            current_player: game.current_player(),
            status: game.status().into(),
        }
    }

    /// Decodes the board strings back into a [`Board`].
    ///
    /// # Errors
    ///
    /// Returns [`UnknownMark`] for any cell string other than `""`, `"X"`
    /// or `"O"`, or for a board that does not have exactly nine cells.
    pub fn decode_board(&self) -> Result<Board, UnknownMark> {
        let mut cells = [Cell::Empty; 9];
        if self.board.len() != cells.len() {
            return Err(UnknownMark {
                mark: format!("<{} cells>", self.board.len()),
                position: self.board.len(),
            });
        }
        for (position, mark) in self.board.iter().enumerate() {
            cells[position] = mark_to_cell(mark, position)?;
        }
        Ok(Board::from_cells(cells))
    }
}

/// Move that was just applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct LastMove {
    /// Player who moved.
    pub player: Player,
    /// Board position (0-8).
    pub position: usize,
}

impl From<Move> for LastMove {
    fn from(mv: Move) -> Self {
        Self::new(mv.player(), mv.position().index())
    }
}

/// Response to a successful move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    /// Updated game snapshot.
    #[serde(flatten)]
    pub game: GameResponse,
    /// The move that was applied.
    pub last_move: LastMove,
}

/// Body of `POST /api/games/{id}/moves`.
///
/// Signed so that negative positions reach range validation instead of
/// failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveRequest {
    /// Board position (valid range 0-8).
    pub position: i64,
}

/// Error body returned with every non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
}
