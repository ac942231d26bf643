//! Geometry of the line drawn across a winning triple.

use super::layout::ScreenLayout;
use crate::games::tictactoe::WinningLine;
use ratatui::layout::Rect;

/// A stroke from the center of a line's first cell to the center of its last
/// cell, in columns/rows relative to the board's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLine {
    /// Start column.
    pub x1: f64,
    /// Start row.
    pub y1: f64,
    /// End column.
    pub x2: f64,
    /// End row.
    pub y2: f64,
    /// Board width the coordinates are relative to.
    pub width: f64,
    /// Board height the coordinates are relative to.
    pub height: f64,
}

impl OverlayLine {
    /// Computes the stroke for `line` in the given layout.
    ///
    /// `None` when the board or either end cell has been squeezed out of view.
    pub fn compute(layout: &ScreenLayout, line: WinningLine) -> Option<Self> {
        let board = layout.board;
        let start = layout.cell(line.first());
        let end = layout.cell(line.last());
        if board.is_empty() || start.is_empty() || end.is_empty() {
            return None;
        }

        let (x1, y1) = center_in(start, board);
        let (x2, y2) = center_in(end, board);
        Some(Self {
            x1,
            y1,
            x2,
            y2,
            width: f64::from(board.width),
            height: f64::from(board.height),
        })
    }

    /// The same stroke with the y axis pointing up, as canvases expect.
    pub fn flipped(&self) -> (f64, f64, f64, f64) {
        (
            self.x1,
            self.height - self.y1,
            self.x2,
            self.height - self.y2,
        )
    }
}

fn center_in(cell: Rect, board: Rect) -> (f64, f64) {
    (
        f64::from(cell.x - board.x) + f64::from(cell.width) / 2.0,
        f64::from(cell.y - board.y) + f64::from(cell.height) / 2.0,
    )
}
