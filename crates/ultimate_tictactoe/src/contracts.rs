//! Contract-based validation for ultimate tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::game::Game;
use super::invariants::{InvariantSet, UltimateInvariants};
use super::{Board, CellMark};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The board must not be decided yet.
pub struct GameUndecided;

impl GameUndecided {
    /// Fails once the board is won or tied.
    #[instrument(skip(board))]
    pub fn check(_mov: &Move, board: &Board) -> Result<(), MoveError> {
        if board.status().is_pending() {
            Ok(())
        } else {
            Err(MoveError::GameAlreadyDecided)
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails unless the mover is the board's next player.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if mov.player != board.next_player() {
            Err(MoveError::WrongTurn {
                expected: board.next_player(),
                attempted: mov.player,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: The targeted cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails if the cell already carries a mark.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        match board.quadrant(mov.quadrant).cell(mov.cell).mark() {
            CellMark::Empty => Ok(()),
            CellMark::Owned(_) => Err(MoveError::CellOccupied {
                quadrant: mov.quadrant,
                cell: mov.cell,
            }),
        }
    }
}

/// Precondition: The targeted quadrant must be open for this move.
pub struct QuadrantIsInteractive;

impl QuadrantIsInteractive {
    /// Fails if the send-to-subgrid rule excludes the quadrant.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if board.quadrant(mov.quadrant).is_interactive() {
            Ok(())
        } else {
            Err(MoveError::QuadrantNotInteractive {
                quadrant: mov.quadrant,
            })
        }
    }
}

/// Composite precondition; the first failing check decides the error.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        GameUndecided::check(mov, board)?;
        PlayersTurn::check(mov, board)?;
        CellIsEmpty::check(mov, board)?;
        QuadrantIsInteractive::check(mov, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Board undecided
/// - Must be player's turn
/// - Cell must be empty
/// - Quadrant must be interactive
///
/// Postconditions:
/// - Players still alternate
/// - History remains consistent with the cells
/// - Only pending quadrants are interactive
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game.board())
    }

    fn post(_before: &Game, after: &Game) -> Result<(), MoveError> {
        UltimateInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_fresh_board_accepts_x_anywhere() {
        let board = Board::new();
        for q in Position::ALL {
            for c in Position::ALL {
                assert!(LegalMove::check(&Move::new(Player::X, q, c), &board).is_ok());
            }
        }
    }

    #[test]
    fn test_o_cannot_open() {
        let board = Board::new();
        let mov = Move::new(Player::O, Position::Center, Position::Center);
        assert_eq!(
            LegalMove::check(&mov, &board),
            Err(MoveError::WrongTurn {
                expected: Player::X,
                attempted: Player::O
            })
        );
    }

    #[test]
    fn test_decided_board_rejects_before_turn_check() {
        let mut board = Board::new();
        board.set_status(crate::Outcome::Tied);
        let mov = Move::new(Player::O, Position::Center, Position::Center);
        assert_eq!(LegalMove::check(&mov, &board), Err(MoveError::GameAlreadyDecided));
    }

    #[test]
    fn test_occupied_reported_before_interactivity() {
        let mut board = Board::new();
        board.quadrant_mut(Position::TopLeft).mark(Position::Center, Player::X);
        board.quadrant_mut(Position::TopLeft).set_interactive(false);
        let mov = Move::new(Player::X, Position::TopLeft, Position::Center);
        assert_eq!(
            LegalMove::check(&mov, &board),
            Err(MoveError::CellOccupied {
                quadrant: Position::TopLeft,
                cell: Position::Center
            })
        );

        let mov = Move::new(Player::X, Position::TopLeft, Position::TopLeft);
        assert_eq!(
            LegalMove::check(&mov, &board),
            Err(MoveError::QuadrantNotInteractive {
                quadrant: Position::TopLeft
            })
        );
    }
}
