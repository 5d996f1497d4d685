//! The single-game state machine.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules;
use super::types::Board;
use tracing::{info, instrument, warn};

/// Ultimate tic-tac-toe game: the board plus every accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game with a fresh board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by applying moves in order.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &action in moves {
            game.make_move(action)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Discards all progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Board reset");
    }

    /// Validates and applies a move.
    ///
    /// Either every effect of the move lands or, on error, nothing changes.
    #[instrument(skip(self, action), fields(%action))]
    pub fn make_move(&mut self, action: Move) -> Result<&Board, MoveError> {
        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(code = e.code(), error = %e, "Move rejected");
            return Err(e);
        }

        let mut next = self.clone();
        next.apply(action);

        if cfg!(debug_assertions) {
            MoveContract::post(self, &next)?;
        }

        *self = next;

        info!(
            quadrant_status = ?self.board.quadrant(action.quadrant).status(),
            board_status = ?self.board.status(),
            next_player = %self.board.next_player(),
            "Move applied"
        );

        Ok(&self.board)
    }

    /// Applies a validated move: mark, resolve, route, resolve, pass the turn.
    fn apply(&mut self, action: Move) {
        let Move {
            player,
            quadrant,
            cell,
        } = action;

        let target = self.board.quadrant_mut(quadrant);
        target.mark(cell, player);
        let status = rules::resolve(&*target, player);
        target.set_status(status);

        rules::route(&mut self.board, cell);

        let status = rules::resolve(&self.board, player);
        self.board.set_status(status);

        // Advances even when the move decided the game.
        self.board.set_next_player(player.opponent());

        self.history.push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Player, Position};

    #[test]
    fn test_move_passes_turn() {
        let mut game = Game::new();
        let board = game
            .make_move(Move::new(Player::X, Position::TopLeft, Position::Center))
            .unwrap();
        assert_eq!(board.next_player(), Player::O);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::new();
        game.make_move(Move::new(Player::X, Position::TopLeft, Position::Center))
            .unwrap();
        let before = game.clone();

        let err = game
            .make_move(Move::new(Player::X, Position::Center, Position::Center))
            .unwrap_err();
        assert!(matches!(err, MoveError::WrongTurn { .. }));
        assert_eq!(game, before);
    }

    #[test]
    fn test_reset_restores_fresh_board() {
        let mut game = Game::new();
        game.make_move(Move::new(Player::X, Position::TopLeft, Position::Center))
            .unwrap();
        game.reset();
        assert_eq!(game, Game::new());
        assert_eq!(game.board().status(), Outcome::Pending);
    }

    #[test]
    fn test_replay_stops_at_first_illegal_move() {
        let result = Game::replay(&[
            Move::new(Player::X, Position::TopLeft, Position::Center),
            Move::new(Player::O, Position::TopLeft, Position::TopLeft),
        ]);
        assert_eq!(
            result.unwrap_err(),
            MoveError::QuadrantNotInteractive {
                quadrant: Position::TopLeft
            }
        );
    }
}
