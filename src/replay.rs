//! Non-interactive replay of a move list.

use crate::games::tictactoe::{Board, Game, GameStatus, MoveError, Player};
use serde::Serialize;
use tracing::{instrument, warn};

/// A move that the engine refused during a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// Zero-based position of the move in the input list.
    pub step: usize,
    /// Requested board index.
    pub index: usize,
    /// Why it was refused.
    pub reason: MoveError,
}

/// Final state after replaying a move list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Marks in row-major order, `null` for empty cells.
    pub board: [Option<Player>; 9],
    /// Mark to move next (unchanged by the final move when it ended the game).
    pub turn: Player,
    /// Final status.
    #[serde(flatten)]
    pub status: GameStatus,
    /// Moves skipped because the engine rejected them.
    pub rejected: Vec<RejectedMove>,
}

impl ReplayReport {
    /// Renders the report as plain text.
    pub fn to_text(&self) -> String {
        let mut out = Board::from(self.board).display();
        out.push_str("\n\n");
        out.push_str(&match self.status {
            GameStatus::InProgress => format!("Turn: {}", self.turn),
            GameStatus::Won { mark, line } => {
                format!("{} wins on {:?}", mark, line.indices())
            }
            GameStatus::Draw => "Draw".to_string(),
        });
        for r in &self.rejected {
            out.push_str(&format!(
                "\nskipped move {} (index {}): {}",
                r.step + 1,
                r.index,
                r.reason
            ));
        }
        out
    }
}

/// Applies `moves` (board indices) to a fresh game.
///
/// Rejected moves are recorded and skipped; they never alter the game.
#[instrument]
pub fn replay(moves: &[usize]) -> ReplayReport {
    let mut game = Game::new();
    let mut rejected = Vec::new();

    for (step, &index) in moves.iter().enumerate() {
        if let Err(reason) = game.apply_move(index) {
            warn!(step, index, %reason, "Skipping rejected move");
            rejected.push(RejectedMove {
                step,
                index,
                reason,
            });
        }
    }

    ReplayReport {
        board: game.board().marks(),
        turn: game.turn(),
        status: game.status(),
        rejected,
    }
}
