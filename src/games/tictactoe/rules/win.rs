//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::Serialize;
use tracing::instrument;

/// One of the eight triples that wins when occupied by a single mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "[usize; 3]")]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// The three positions, in scan order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices, in scan order.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// First cell of the line (start of the overlay stroke).
    pub fn first(&self) -> Position {
        self.0[0]
    }

    /// Last cell of the line (end of the overlay stroke).
    pub fn last(&self) -> Position {
        self.0[2]
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

impl From<WinningLine> for [usize; 3] {
    fn from(line: WinningLine) -> Self {
        line.indices()
    }
}

/// All winning lines in scan order: rows top to bottom, columns left to
/// right, then the two diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinningLine([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinningLine([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinningLine([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinningLine([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks if there is a winner on the board.
///
/// Returns the winning player together with the first complete line in
/// [`WINNING_LINES`] order, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    WINNING_LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some((player, *line))
            }
            _ => None,
        }
    })
}
