//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Status is never stored, it is recomputed
//! from the board with [`evaluate`] whenever it is needed.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, WinningLine, check_winner};

use super::{Board, GameStatus};
use tracing::instrument;

/// Classifies a board as won, drawn or still in progress.
///
/// Lines are checked in [`WINNING_LINES`] order and the first complete one is
/// reported, so a board satisfying two triples always yields the same line.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((mark, line)) = check_winner(board) {
        GameStatus::Won { mark, line }
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
