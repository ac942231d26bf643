//! Two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **Games**: the pure game engine (board, turn, win/draw detection)
//! - **TUI**: terminal front end drawing the board and mapping keys and clicks
//!   to engine moves
//! - **Config**: TOML theme and logging settings
//! - **Replay**: non-interactive evaluation of a move list
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index).unwrap();
//! }
//! assert!(matches!(game.status(), GameStatus::Won { mark: Player::X, .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod replay;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_CONFIG_FILE, LogConfig, Theme};

// Crate-level exports - Replay
pub use replay::{RejectedMove, ReplayReport, replay};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameStatus, Mark, Move, MoveError, Player, Position, Square, WINNING_LINES,
    WinningLine, evaluate,
};

// Crate-level exports - Invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant,
    MonotonicBoardInvariant, TicTacToeInvariants,
};
