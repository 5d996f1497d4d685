//! Decided quadrants are never playable.

use super::Invariant;
use crate::Game;

/// Invariant: Only pending quadrants may be interactive.
pub struct InteractivePendingInvariant;

impl Invariant<Game> for InteractivePendingInvariant {
    fn holds(game: &Game) -> bool {
        game.board()
            .quadrants()
            .iter()
            .all(|q| !q.is_interactive() || q.status().is_pending())
    }

    fn description() -> &'static str {
        "Only pending quadrants are interactive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(InteractivePendingInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_decided_interactive_quadrant_violates() {
        let mut game = Game::new();
        game.board
            .quadrant_mut(Position::Center)
            .set_status(Outcome::Decided(Player::X));
        assert!(!InteractivePendingInvariant::holds(&game));
    }
}
