//! Tests for tic-tac-toe position enum.

use strictly_tictactoe::{Board, Game, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_digit_keys_cover_board_row_major() {
    let positions: Vec<_> = ('1'..='9').filter_map(Position::from_digit).collect();
    assert_eq!(positions, Position::ALL.to_vec());
}

#[test]
fn test_empty_squares_after_moves() {
    let mut game = Game::new();
    game.place(Position::TopLeft).unwrap();
    game.place(Position::Center).unwrap();

    let board: &Board = game.board();
    let empty: Vec<_> = Position::iter().filter(|p| board.is_empty(*p)).collect();
    assert_eq!(empty.len(), 7);
    assert!(!empty.contains(&Position::TopLeft));
    assert!(!empty.contains(&Position::Center));
    assert!(empty.contains(&Position::BottomRight));
}
