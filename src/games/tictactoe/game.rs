//! Tic-tac-toe game engine.
//!
//! [`Game`] is the single source of truth for board, turn and legality. The
//! status is not stored; [`Game::status`] re-evaluates the board each call.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::position::Position;
use super::rules::evaluate;
use super::types::{Board, GameStatus, Player, Square};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that plays next.
    ///
    /// After a game-ending move this stays on the player who ended it.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the accepted moves in play order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the game status, recomputed from the board.
    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    /// Checks whether a move at `index` would be accepted, without applying it.
    pub fn check_move(&self, index: usize) -> Result<Position, MoveError> {
        if self.status().is_terminal() {
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        Ok(pos)
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// The turn passes to the opponent only if the game is still in progress
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] when the index is off the board, the square is
    /// taken, or the game is already over. The game is unchanged in that case.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let pos = match self.check_move(index) {
            Ok(pos) => pos,
            Err(e) => {
                debug!(error = %e, "Move rejected");
                return Err(e);
            }
        };

        let player = self.turn;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));

        let status = self.status();
        if !status.is_terminal() {
            self.turn = player.opponent();
        }

        debug_assert!(
            TicTacToeInvariants::check_all(self).is_ok(),
            "Game invariants violated after move"
        );

        match status {
            GameStatus::Won { mark, line } => {
                info!(winner = %mark, line = ?line.indices(), "Game won");
            }
            GameStatus::Draw => info!("Game drawn"),
            GameStatus::InProgress => debug!(position = %pos, "Move applied"),
        }

        Ok(status)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// Same as [`Game::apply_move`].
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        self.apply_move(pos.to_index())
    }

    /// Clears the board and gives the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting board");
        *self = Self::new();
    }
}
