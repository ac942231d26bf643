//! Application state and logic.

use super::input::{self, Action};
use super::layout::ScreenLayout;
use crate::games::tictactoe::{Game, GameStatus, Position};
use tracing::{debug, info, warn};

/// Main application state.
#[derive(Debug, Clone, Default)]
pub struct App {
    game: Game,
    cursor: Position,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Feedback about the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the cell at `pos` currently takes a move.
    ///
    /// Filled cells and every cell of a finished game are disabled.
    pub fn accepts_move_at(&self, pos: Position) -> bool {
        !self.game.status().is_terminal() && self.game.board().is_empty(pos)
    }

    /// Text of the status line.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("Turn: {}", self.game.turn()),
            GameStatus::Won { mark, .. } => format!("{} wins!", mark),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    /// Handles one action; `layout` is the last frame drawn.
    pub fn handle(&mut self, action: Action, layout: &ScreenLayout) {
        debug!(?action, "Handling action");

        match action {
            Action::Place(pos) => self.play(pos),
            Action::PlaceAtCursor => self.play(self.cursor),
            Action::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Action::Click { column, row } => {
                if layout.on_reset_button(column, row) {
                    self.restart();
                } else if let Some(pos) = layout.cell_at(column, row) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            Action::Reset => self.restart(),
            Action::Quit => self.should_quit = true,
            Action::Redraw => {}
        }
    }

    fn play(&mut self, pos: Position) {
        if !self.accepts_move_at(pos) {
            debug!(position = %pos, "Input disabled for cell");
            return;
        }

        let player = self.game.turn();
        match self.game.place(pos) {
            Ok(_) => {
                self.message = Some(format!("{} played {}", player, pos.label()));
            }
            Err(e) => {
                warn!(error = %e, "Engine rejected move");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Restarts the game. The cursor stays where it is.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game.reset();
        self.message = None;
    }
}
