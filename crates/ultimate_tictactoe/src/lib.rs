//! Ultimate tic-tac-toe game engine.
//!
//! A board is a 3x3 grid of quadrants, each itself a 3x3 tic-tac-toe grid.
//! The cell a player marks decides which quadrant the opponent must play in
//! next, and won quadrants form a meta-grid decided by the same lines.
//!
//! # Architecture
//!
//! - **Types**: board, quadrant and cell data with serde wire format
//! - **Rules**: win/tie resolution shared by both grid layers, quadrant routing
//! - **Contracts**: ordered move preconditions and debug-build postconditions
//! - **Game**: single-threaded state machine with move history
//! - **Engine**: shareable, lock-guarded handle used by transports
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{Engine, MoveError, Outcome, Player};
//!
//! let engine = Engine::new();
//! let board = engine.apply_move(Player::X, 0, 4).unwrap();
//! assert_eq!(board.status(), Outcome::Pending);
//! assert_eq!(board.next_player(), Player::O);
//!
//! let err = engine.apply_move(Player::O, 0, 4).unwrap_err();
//! assert!(matches!(err, MoveError::CellOccupied { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod game;
mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{
    CellIsEmpty, Contract, GameUndecided, LegalMove, MoveContract, PlayersTurn,
    QuadrantIsInteractive,
};
pub use engine::Engine;
pub use game::Game;
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, InteractivePendingInvariant, Invariant,
    InvariantSet, InvariantViolation, UltimateInvariants,
};
pub use position::Position;
pub use types::{Board, Cell, CellMark, Outcome, Player, Quadrant};
