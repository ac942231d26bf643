//! Translation of terminal events into game actions.

use crate::games::tictactoe::Position;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the top row.
    Up,
    /// Towards the bottom row.
    Down,
    /// Towards the left column.
    Left,
    /// Towards the right column.
    Right,
}

/// A user request, independent of the device that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play at a position (digit keys).
    Place(Position),
    /// Play at the keyboard cursor.
    PlaceAtCursor,
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Left click at a screen cell; resolved against the last drawn layout.
    Click {
        /// Screen column.
        column: u16,
        /// Screen row.
        row: u16,
    },
    /// Clear the board.
    Reset,
    /// Leave the application.
    Quit,
    /// Terminal resized; nothing changes but the next frame.
    Redraw,
}

/// Maps a terminal event to an action, `None` for events the game ignores.
pub fn map_event(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(..) => Some(Action::Redraw),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => Position::from_digit(c).map(Action::Place),
        KeyCode::Char('r' | 'R') => Some(Action::Reset),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::PlaceAtCursor),
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Moves the cursor one cell, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (r, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|c| (row, c)),
        Direction::Right => Some((row, col + 1)),
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_digits_map_to_positions() {
        assert_eq!(
            map_event(&key(KeyCode::Char('1'))),
            Some(Action::Place(Position::TopLeft))
        );
        assert_eq!(
            map_event(&key(KeyCode::Char('9'))),
            Some(Action::Place(Position::BottomRight))
        );
        assert_eq!(map_event(&key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_reset_keys() {
        assert_eq!(map_event(&key(KeyCode::Char('r'))), Some(Action::Reset));
        assert_eq!(map_event(&key(KeyCode::Char('R'))), Some(Action::Reset));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_event(&key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_event(&key(KeyCode::Esc)), Some(Action::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&ctrl_c), Some(Action::Quit));
        assert_eq!(map_event(&key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event(&Event::Key(release)), None);
    }

    #[test]
    fn test_left_click() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            map_event(&click),
            Some(Action::Click { column: 12, row: 7 })
        );

        let right = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(&right), None);
    }

    #[test]
    fn test_resize_redraws() {
        assert_eq!(map_event(&Event::Resize(100, 40)), Some(Action::Redraw));
    }

    #[test]
    fn test_cursor_moves_and_stops_at_edges() {
        use Position::*;
        assert_eq!(move_cursor(Center, Direction::Up), TopCenter);
        assert_eq!(move_cursor(Center, Direction::Right), MiddleRight);
        assert_eq!(move_cursor(TopLeft, Direction::Up), TopLeft);
        assert_eq!(move_cursor(TopLeft, Direction::Left), TopLeft);
        assert_eq!(move_cursor(BottomRight, Direction::Down), BottomRight);
        assert_eq!(move_cursor(BottomRight, Direction::Right), BottomRight);
        assert_eq!(move_cursor(MiddleRight, Direction::Right), MiddleRight);
    }
}
