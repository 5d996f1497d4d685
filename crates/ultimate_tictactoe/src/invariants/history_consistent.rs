//! History consistency invariant: the cells are exactly the recorded moves.

use super::Invariant;
use crate::{CellMark, Game};

/// Invariant: Every recorded move owns its cell, and nothing else is marked.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();

        let recorded = game.history().iter().all(|mov| {
            board.quadrant(mov.quadrant).cell(mov.cell).mark() == CellMark::Owned(mov.player)
        });

        let marked = board
            .quadrants()
            .iter()
            .flat_map(|q| q.cells().iter())
            .filter(|cell| !cell.is_empty())
            .count();

        recorded && marked == game.history().len()
    }

    fn description() -> &'static str {
        "Marked cells match the move history"
    }
}
