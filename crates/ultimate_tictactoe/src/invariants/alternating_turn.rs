//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and the next player is the
/// opponent of the last mover, even after the game is decided.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        let expected_next = history
            .last()
            .map_or(Player::X, |last| last.player.opponent());

        game.board().next_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_sequence_holds() {
        let game = Game::replay(&[
            Move::new(Player::X, Position::TopLeft, Position::TopLeft),
            Move::new(Player::O, Position::TopLeft, Position::Center),
            Move::new(Player::X, Position::Center, Position::BottomRight),
        ])
        .unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.board().next_player(), Player::O);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = Game::new();
        game.history
            .push(Move::new(Player::X, Position::TopLeft, Position::TopLeft));
        game.history
            .push(Move::new(Player::X, Position::TopLeft, Position::Center));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
