//! Interactive-quadrant derivation (the send-to-subgrid rule).

use crate::{Board, Position};
use tracing::{debug, instrument};

/// Recomputes which quadrants the next move may target.
///
/// The opponent is sent to the quadrant matching the cell just played. If
/// that quadrant is already decided, every pending quadrant opens up.
#[instrument(skip(board))]
pub fn route(board: &mut Board, played_cell: Position) {
    for quadrant in board.quadrants_mut() {
        quadrant.set_interactive(false);
    }

    if board.quadrant(played_cell).status().is_pending() {
        debug!(target_quadrant = played_cell.to_index(), "Sending opponent to quadrant");
        board.quadrant_mut(played_cell).set_interactive(true);
        return;
    }

    debug!(
        target_quadrant = played_cell.to_index(),
        "Target quadrant decided, opening all pending quadrants"
    );
    for quadrant in board.quadrants_mut() {
        if quadrant.status().is_pending() {
            quadrant.set_interactive(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Player};

    #[test]
    fn test_pending_target_is_exclusive() {
        let mut board = Board::new();
        route(&mut board, Position::MiddleRight);
        assert_eq!(board.interactive_quadrants(), vec![Position::MiddleRight]);
    }

    #[test]
    fn test_decided_target_opens_pending_quadrants() {
        let mut board = Board::new();
        board.quadrant_mut(Position::TopLeft).set_status(Outcome::Decided(Player::O));
        board.quadrant_mut(Position::Center).set_status(Outcome::Tied);
        route(&mut board, Position::Center);

        let open = board.interactive_quadrants();
        assert_eq!(open.len(), 7);
        assert!(!open.contains(&Position::TopLeft));
        assert!(!open.contains(&Position::Center));
    }

    #[test]
    fn test_nothing_open_when_all_decided() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.quadrant_mut(pos).set_status(Outcome::Tied);
        }
        route(&mut board, Position::TopLeft);
        assert!(board.interactive_quadrants().is_empty());
    }
}
