//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: Players alternate turns, starting with X.
///
/// The turn must name the next player while the game is in progress, and the
/// player who made the final move once it is over.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected = match history.last() {
            None => Player::X,
            Some(last) if game.status().is_terminal() => last.player,
            Some(last) => last.player.opponent(),
        };

        game.turn() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
