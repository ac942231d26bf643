//! Tic-tac-toe game engine: board, turn and terminal-condition detection.

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use rules::{WINNING_LINES, WinningLine, evaluate};
pub use types::{Board, GameStatus, Player, Square};

/// Alias for clarity in presentation code.
pub type Mark = Player;
