//! Mark balance invariant: X leads O by at most one mark.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: the number of X marks minus the number of O marks is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X marks minus O marks is 0 or 1"
    }
}
