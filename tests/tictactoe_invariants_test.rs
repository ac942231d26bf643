//! Tests for the composed game invariants.

use strictly_tictactoe::{
    Game, Invariant, InvariantSet, MarkBalanceInvariant, MonotonicBoardInvariant,
    TicTacToeInvariants,
};

#[test]
fn test_invariants_hold_through_full_game() {
    let mut game = Game::new();
    assert!(TicTacToeInvariants::check_all(&game).is_ok());
    for index in [4, 0, 2, 6, 3, 5, 7, 1, 8] {
        game.apply_move(index).unwrap();
        assert!(TicTacToeInvariants::check_all(&game).is_ok());
    }
}

#[test]
fn test_invariants_hold_after_rejections_and_reset() {
    let mut game = Game::new();
    game.apply_move(4).unwrap();
    let _ = game.apply_move(4);
    let _ = game.apply_move(11);
    assert!(TicTacToeInvariants::check_all(&game).is_ok());
    game.reset();
    assert!(MonotonicBoardInvariant::holds(&game));
    assert!(MarkBalanceInvariant::holds(&game));
}

#[test]
fn test_descriptions_are_distinct() {
    assert_ne!(
        MonotonicBoardInvariant::description(),
        MarkBalanceInvariant::description()
    );
}
