//! Screen geometry: where the board, its cells and the controls are drawn.
//!
//! The layout is a pure function of the terminal area. It is recomputed for
//! every frame and the last one drawn is used to hit-test mouse clicks.

use crate::games::tictactoe::Position;
use ratatui::layout::{Constraint, Layout, Position as ScreenPosition, Rect};

/// Width of one board cell in terminal columns.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell in terminal rows.
pub const CELL_HEIGHT: u16 = 3;
/// Board width including the two vertical grid lines.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Board height including the two horizontal grid lines.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const BUTTON_WIDTH: u16 = 17;
const BUTTON_HEIGHT: u16 = 3;

/// Rectangles of every widget on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    /// Title banner.
    pub title: Rect,
    /// Turn / outcome line.
    pub status: Rect,
    /// The whole grid, cells and lines.
    pub board: Rect,
    /// Cells in row-major order.
    pub cells: [Rect; 9],
    /// The "Reset Board" control.
    pub reset_button: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Lays out the screen inside `area`.
    pub fn compute(area: Rect) -> Self {
        let [title, status, board_area, button_area, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(area);

        let board = center_rect(board_area, BOARD_WIDTH, BOARD_HEIGHT);
        let cells = std::array::from_fn(|i| {
            let (row, col) = ((i / 3) as u16, (i % 3) as u16);
            Rect::new(
                board.x + col * (CELL_WIDTH + 1),
                board.y + row * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board)
        });

        Self {
            title,
            status,
            board,
            cells,
            reset_button: center_rect(button_area, BUTTON_WIDTH, BUTTON_HEIGHT),
            help,
        }
    }

    /// Rectangle of the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// The cell under a screen coordinate, if any.
    ///
    /// Grid lines between cells belong to no cell.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPosition::new(column, row);
        self.cells
            .iter()
            .position(|r| r.contains(point))
            .and_then(Position::from_index)
    }

    /// Whether a screen coordinate falls on the reset control.
    pub fn on_reset_button(&self, column: u16, row: u16) -> bool {
        self.reset_button.contains(ScreenPosition::new(column, row))
    }
}

/// Centers a `width` x `height` rectangle in `area`, shrinking it to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
