//! Tests for the tic-tac-toe engine contract.

use strictly_tictactoe::{Board, Game, GameStatus, MoveError, Player, Position, evaluate};

const X: Option<Player> = Some(Player::X);
const O: Option<Player> = Some(Player::O);
const E: Option<Player> = None;

fn line_of(status: GameStatus) -> Option<[usize; 3]> {
    status.winning_line().map(|l| l.indices())
}

#[test]
fn test_turn_follows_move_parity_until_terminal() {
    // X: 4, 2, 3, 7  O: 0, 6, 5, 1 and X finishes on 8 with a draw.
    let moves = [4, 0, 2, 6, 3, 5, 7, 1, 8];
    let mut game = Game::new();

    for (n, index) in moves.into_iter().enumerate() {
        let expected = if (n + 1) % 2 == 1 { Player::X } else { Player::O };
        assert_eq!(game.turn(), expected, "before move {}", n + 1);
        game.apply_move(index).expect("legal move");
    }
    assert_eq!(game.status(), GameStatus::Draw);
}

#[test]
fn test_rejected_moves_never_mutate() {
    let mut game = Game::new();
    game.apply_move(0).unwrap();
    let snapshot = game.clone();

    assert_eq!(
        game.apply_move(0),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );
    assert_eq!(game.apply_move(9), Err(MoveError::OutOfRange(9)));
    assert_eq!(game.apply_move(usize::MAX), Err(MoveError::OutOfRange(usize::MAX)));
    assert_eq!(game, snapshot);
    assert_eq!(game.turn(), Player::O);
}

#[test]
fn test_rejected_moves_after_terminal_never_mutate() {
    let mut game = Game::new();
    for index in [0, 3, 1, 4, 2] {
        game.apply_move(index).unwrap();
    }
    let snapshot = game.clone();
    for index in [5, 6, 7, 8, 0, 42] {
        assert_eq!(game.apply_move(index), Err(MoveError::GameOver));
    }
    assert_eq!(game, snapshot);
}

#[test]
fn test_evaluate_top_row() {
    let status = evaluate(&Board::from([X, X, X, E, E, E, E, E, E]));
    assert_eq!(status.winner(), Some(Player::X));
    assert_eq!(line_of(status), Some([0, 1, 2]));
}

#[test]
fn test_evaluate_diagonal() {
    let status = evaluate(&Board::from([O, E, E, E, O, E, E, E, O]));
    assert_eq!(status.winner(), Some(Player::O));
    assert_eq!(line_of(status), Some([0, 4, 8]));
}

#[test]
fn test_evaluate_draw() {
    assert_eq!(
        evaluate(&Board::from([X, O, X, X, O, O, O, X, X])),
        GameStatus::Draw
    );
}

#[test]
fn test_evaluate_in_progress() {
    assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    assert_eq!(
        evaluate(&Board::from([X, O, X, E, O, E, E, X, E])),
        GameStatus::InProgress
    );
}

#[test]
fn test_reset_from_any_state() {
    let mut game = Game::new();
    for index in [4, 0, 8] {
        game.apply_move(index).unwrap();
    }
    game.reset();
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.turn(), Player::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.history().is_empty());

    let mut finished = Game::new();
    for index in [0, 3, 1, 4, 2] {
        finished.apply_move(index).unwrap();
    }
    finished.reset();
    finished.reset();
    assert_eq!(finished, Game::new());
}

#[test]
fn test_top_row_sequence_wins_without_turn_flip() {
    let mut game = Game::new();
    let mut last = GameStatus::InProgress;
    for index in [0, 3, 1, 4, 2] {
        last = game.apply_move(index).unwrap();
    }
    assert_eq!(last.winner(), Some(Player::X));
    assert_eq!(line_of(last), Some([0, 1, 2]));
    assert_eq!(game.status(), last);
    assert_eq!(game.turn(), Player::X);
}

#[test]
fn test_history_records_players_in_order() {
    let mut game = Game::new();
    for index in [8, 4] {
        game.apply_move(index).unwrap();
    }
    let history = game.history();
    assert_eq!(history[0].player(), Player::X);
    assert_eq!(history[0].position(), Position::BottomRight);
    assert_eq!(history[1].player(), Player::O);
    assert_eq!(history[1].to_string(), "O -> Center");
}
