//! Line-based console game.

use crate::backend::{GameBackend, GameView, MoveOutcome};
use crate::input::parse_coordinates;
use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use std::io::{BufRead, Write};
use tictactoe_engine::{Cell, GameStatus, Player};
use tracing::{debug, info, instrument};

/// Shown when typed input is not a `row,col` pair on the board.
pub const INPUT_FORMAT_MESSAGE: &str =
    "Invalid input format. Please enter coordinates as 'row,col' (e.g., '1,2').";

/// Plays games on a [`GameBackend`], reading moves from `input` and
/// drawing to `out`.
pub struct GameConsole<B, R, W> {
    backend: B,
    input: R,
    out: W,
}

impl<B, R, W> GameConsole<B, R, W>
where
    B: GameBackend,
    R: BufRead,
    W: Write,
{
    /// Creates a console over the given backend and streams.
    pub fn new(backend: B, input: R, out: W) -> Self {
        Self {
            backend,
            input,
            out,
        }
    }

    /// Consumes the console, returning its parts.
    pub fn into_parts(self) -> (B, R, W) {
        (self.backend, self.input, self.out)
    }

    /// Plays games until the player declines another or input ends.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<()> {
        self.show_welcome()?;
        loop {
            if !self.play_game().await? {
                info!("Input closed mid-game");
                break;
            }
            if !self.prompt_play_again()? {
                break;
            }
            self.backend.new_game().await?;
            self.show_welcome()?;
        }
        writeln!(self.out, "Thanks for playing! 👋")?;
        self.out.flush()?;
        Ok(())
    }

    /// Plays one game to its end. Returns `false` if input ran out first.
    async fn play_game(&mut self) -> Result<bool> {
        loop {
            let view = self.backend.view().await?;
            self.display_board(&view)?;

            if view.status.is_terminal() {
                self.show_game_result(view.status)?;
                self.wait_for_continue()?;
                return Ok(true);
            }

            self.display_status(&view)?;
            let Some(line) = self.prompt_move(view.current_player)? else {
                return Ok(false);
            };

            let (row, col) = match parse_coordinates(&line) {
                Ok(coords) => coords,
                Err(err) => {
                    debug!(input = %line.trim(), error = %err, "Unparseable move");
                    self.show_error(INPUT_FORMAT_MESSAGE)?;
                    continue;
                }
            };

            match self.backend.play(row, col).await? {
                MoveOutcome::Placed(player) => self.show_move_success(row, col, player)?,
                MoveOutcome::Rejected(reason) => self.show_error(&reason)?,
            }
        }
    }

    fn show_welcome(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        writeln!(self.out, "🎮 Welcome to Tic Tac Toe! 🎮")?;
        writeln!(self.out)?;
        writeln!(self.out, "How to play:")?;
        writeln!(self.out, "• Enter coordinates as 'row,col' (e.g., '1,2')")?;
        writeln!(
            self.out,
            "• Coordinates range from 0,0 (top-left) to 2,2 (bottom-right)"
        )?;
        writeln!(self.out, "• X goes first, then players alternate")?;
        writeln!(
            self.out,
            "• Get 3 in a row (horizontal, vertical, or diagonal) to win!"
        )?;
        writeln!(self.out)?;
        Ok(())
    }

    fn display_board(&mut self, view: &GameView) -> Result<()> {
        writeln!(self.out, "Current Board:")?;
        writeln!(self.out, "{}", render_board(view))?;
        Ok(())
    }

    fn display_status(&mut self, view: &GameView) -> Result<()> {
        writeln!(self.out, "Game Status: {}", view.status)?;
        if view.status == GameStatus::InProgress {
            writeln!(self.out, "Current Player: {}", view.current_player)?;
        }
        writeln!(self.out, "Moves Made: {}", view.moves_made)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn prompt_move(&mut self, player: Player) -> Result<Option<String>> {
        write!(self.out, "Player {}, enter your move (row,col): ", player)?;
        self.out.flush()?;
        self.read_line()
    }

    fn show_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", format!("❌ {}", message).red())?;
        writeln!(self.out)?;
        Ok(())
    }

    fn show_move_success(&mut self, row: usize, col: usize, player: Player) -> Result<()> {
        let message = format!("✅ Player {} placed at ({},{})", player, row, col);
        writeln!(self.out, "{}", message.green())?;
        writeln!(self.out)?;
        Ok(())
    }

    fn show_game_result(&mut self, status: GameStatus) -> Result<()> {
        let line = match status {
            GameStatus::XWon => "🎉 Player X Wins! 🎉".yellow(),
            GameStatus::OWon => "🎉 Player O Wins! 🎉".yellow(),
            GameStatus::Draw => "🤝 It's a Draw! 🤝".cyan(),
            GameStatus::InProgress => "Game in progress...".white(),
        };
        writeln!(self.out, "{}", line)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn prompt_play_again(&mut self) -> Result<bool> {
        write!(self.out, "Would you like to play again? (y/n): ")?;
        self.out.flush()?;
        let answer = self.read_line()?.map(|line| line.trim().to_lowercase());
        Ok(matches!(answer.as_deref(), Some("y" | "yes")))
    }

    fn wait_for_continue(&mut self) -> Result<()> {
        writeln!(self.out, "Press Enter to continue...")?;
        self.out.flush()?;
        self.read_line()?;
        Ok(())
    }

    /// Reads one line; `None` at end of input.
    ///
    /// Blocks the runtime thread; the console has no other work in flight
    /// while it waits for the player.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Draws the board with row and column labels, `·` marking empty cells.
pub fn render_board(view: &GameView) -> String {
    let mut result = String::from("   0   1   2\n");
    for (row, cells) in view.board.cells().chunks(3).enumerate() {
        result.push_str(&format!("{}  ", row));
        let marks: Vec<String> = cells
            .iter()
            .map(|cell| match cell {
                Cell::Empty => "·".to_string(),
                Cell::Occupied(player) => player.to_string(),
            })
            .collect();
        result.push_str(&marks.join(" | "));
        result.push('\n');
        if row < 2 {
            result.push_str("   ---------\n");
        }
    }
    result
}
