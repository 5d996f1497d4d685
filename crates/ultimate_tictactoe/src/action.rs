//! First-class action types for ultimate tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player marking one cell of one quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The quadrant being played in.
    pub quadrant: Position,
    /// The cell within that quadrant.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, quadrant: Position, cell: Position) -> Self {
        Self {
            player,
            quadrant,
            cell,
        }
    }

    /// Creates a move from raw indices, rejecting anything outside 0-8.
    #[instrument]
    pub fn from_indices(
        player: Player,
        quadrant_index: usize,
        cell_index: usize,
    ) -> Result<Self, MoveError> {
        let quadrant = Position::from_index(quadrant_index).ok_or(MoveError::IndexOutOfRange {
            index: quadrant_index,
        })?;
        let cell = Position::from_index(cell_index)
            .ok_or(MoveError::IndexOutOfRange { index: cell_index })?;
        Ok(Self::new(player, quadrant, cell))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> quadrant {}, cell {}",
            self.player,
            self.quadrant.to_index(),
            self.cell.to_index()
        )
    }
}

/// Reason a move was rejected.
///
/// Every variant is returned before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum MoveError {
    /// The board already has a winner or is tied.
    #[display("Game is already decided")]
    GameAlreadyDecided,

    /// It's not this player's turn.
    #[display("It's not {}'s turn, {} is to move", attempted, expected)]
    WrongTurn {
        /// Player whose turn it is.
        expected: Player,
        /// Player who tried to move.
        attempted: Player,
    },

    /// The quadrant is not open for the next move.
    #[display("Quadrant {} is not playable right now", quadrant.to_index())]
    QuadrantNotInteractive {
        /// Targeted quadrant.
        quadrant: Position,
    },

    /// The cell has already been marked.
    #[display(
        "Cell {} of quadrant {} is already occupied",
        cell.to_index(),
        quadrant.to_index()
    )]
    CellOccupied {
        /// Targeted quadrant.
        quadrant: Position,
        /// Targeted cell.
        cell: Position,
    },

    /// A quadrant or cell index outside 0-8.
    #[display("Index {} out of range (must be 0-8)", index)]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// Stable machine-readable identifier for this kind of error.
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

impl std::error::Error for MoveError {}
