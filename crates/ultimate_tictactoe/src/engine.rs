//! Shared, thread-safe access to one game.

use super::action::{Move, MoveError};
use super::game::Game;
use super::types::{Board, Player};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, instrument};

/// Handle to a single game that request handlers can share.
///
/// Clones point at the same game. Moves and resets take the write lock for
/// their whole read-validate-mutate sequence; snapshots take the read lock,
/// so they never observe a half-applied move.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    game: Arc<RwLock<Game>>,
}

impl Engine {
    /// Creates an engine holding a fresh, independent game.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game engine");
        Self {
            game: Arc::new(RwLock::new(Game::new())),
        }
    }

    /// Returns a snapshot of the current board.
    pub fn state(&self) -> Board {
        self.game.read().board().clone()
    }

    /// Returns the accepted moves, oldest first.
    pub fn history(&self) -> Vec<Move> {
        self.game.read().history().to_vec()
    }

    /// Replaces the game with a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        self.game.write().reset();
    }

    /// Validates and applies a move given as raw indices.
    ///
    /// Indices outside 0-8 are rejected before the game is locked.
    #[instrument(skip(self))]
    pub fn apply_move(
        &self,
        player: Player,
        quadrant_index: usize,
        cell_index: usize,
    ) -> Result<Board, MoveError> {
        let action = Move::from_indices(player, quadrant_index, cell_index)?;
        self.play(action)
    }

    /// Validates and applies a move.
    #[instrument(skip(self))]
    pub fn play(&self, action: Move) -> Result<Board, MoveError> {
        let mut game = self.game.write();
        game.make_move(action).cloned()
    }
}
