//! Outcome resolution shared by quadrants and the board.

use super::win::has_line;
use crate::{Board, CellMark, Outcome, Player, Position, Quadrant};
use tracing::instrument;

/// A 3x3 grid whose slots can be owned by a player or settled.
///
/// A quadrant's slots are cells (owned when marked). The board's slots
/// are quadrants (owned only when won; tied quadrants are settled but
/// unowned).
pub trait Grid {
    /// The player owning the slot, if any.
    fn owner(&self, pos: Position) -> Option<Player>;

    /// Whether the slot can no longer change.
    fn is_settled(&self, pos: Position) -> bool;
}

impl Grid for Quadrant {
    fn owner(&self, pos: Position) -> Option<Player> {
        match self.cell(pos).mark() {
            CellMark::Owned(player) => Some(player),
            CellMark::Empty => None,
        }
    }

    fn is_settled(&self, pos: Position) -> bool {
        !self.cell(pos).is_empty()
    }
}

impl Grid for Board {
    fn owner(&self, pos: Position) -> Option<Player> {
        self.quadrant(pos).status().winner()
    }

    fn is_settled(&self, pos: Position) -> bool {
        !self.quadrant(pos).status().is_pending()
    }
}

/// Resolves a grid after `mover` has acted on it.
///
/// Won by `mover` if they own a winning line, tied if every slot is
/// settled, pending otherwise.
#[instrument(skip(grid))]
pub fn resolve(grid: &impl Grid, mover: Player) -> Outcome {
    if has_line(|pos| grid.owner(pos) == Some(mover)) {
        Outcome::Decided(mover)
    } else if Position::ALL.into_iter().all(|pos| grid.is_settled(pos)) {
        Outcome::Tied
    } else {
        Outcome::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadrant_from(marks: &str) -> Quadrant {
        let mut quadrant = Quadrant::new();
        for (pos, ch) in Position::ALL.into_iter().zip(marks.chars()) {
            match ch {
                'X' => quadrant.mark(pos, Player::X),
                'O' => quadrant.mark(pos, Player::O),
                _ => {}
            }
        }
        quadrant
    }

    #[test]
    fn test_quadrant_win() {
        let quadrant = quadrant_from("XXX.OO...");
        assert_eq!(resolve(&quadrant, Player::X), Outcome::Decided(Player::X));
    }

    #[test]
    fn test_quadrant_pending() {
        let quadrant = quadrant_from("XX..O....");
        assert_eq!(resolve(&quadrant, Player::X), Outcome::Pending);
    }

    #[test]
    fn test_full_quadrant_without_line_is_tied() {
        // X O X / X O O / O X X
        let quadrant = quadrant_from("XOXXOOOXX");
        assert_eq!(resolve(&quadrant, Player::X), Outcome::Tied);
        assert_eq!(resolve(&quadrant, Player::O), Outcome::Tied);
    }

    #[test]
    fn test_win_on_last_cell_beats_tie() {
        // X O X / O X O / O X X: full, and X holds the main diagonal
        let quadrant = quadrant_from("XOXOXOOXX");
        assert_eq!(resolve(&quadrant, Player::X), Outcome::Decided(Player::X));
    }

    #[test]
    fn test_board_counts_only_won_quadrants() {
        let mut board = Board::new();
        board.quadrant_mut(Position::TopLeft).set_status(Outcome::Decided(Player::X));
        board.quadrant_mut(Position::Center).set_status(Outcome::Tied);
        board.quadrant_mut(Position::BottomRight).set_status(Outcome::Decided(Player::X));
        assert_eq!(resolve(&board, Player::X), Outcome::Pending);

        board.quadrant_mut(Position::Center).set_status(Outcome::Decided(Player::X));
        assert_eq!(resolve(&board, Player::X), Outcome::Decided(Player::X));
    }

    #[test]
    fn test_board_tied_when_all_quadrants_settled() {
        let mut board = Board::new();
        // X O X / X O O / O X X at the meta level, with one tie mixed in
        let layout = [
            Outcome::Decided(Player::X),
            Outcome::Decided(Player::O),
            Outcome::Decided(Player::X),
            Outcome::Decided(Player::X),
            Outcome::Tied,
            Outcome::Decided(Player::O),
            Outcome::Decided(Player::O),
            Outcome::Decided(Player::X),
            Outcome::Decided(Player::X),
        ];
        for (pos, outcome) in Position::ALL.into_iter().zip(layout) {
            board.quadrant_mut(pos).set_status(outcome);
        }
        assert_eq!(resolve(&board, Player::X), Outcome::Tied);
    }
}
