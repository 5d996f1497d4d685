//! Core domain types for ultimate tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player O (goes second).
    O,
    /// Player X (goes first).
    X,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Status values as they appear on the wire.
///
/// Cells and grids share this vocabulary externally but not internally:
/// a cell can never be `tied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum Status {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "tied")]
    Tied,
    O,
    X,
}

impl From<Player> for Status {
    fn from(player: Player) -> Self {
        match player {
            Player::O => Status::O,
            Player::X => Status::X,
        }
    }
}

/// Mark held by a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Status", try_from = "Status")]
pub enum CellMark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by a player; never changes afterwards.
    Owned(Player),
}

impl From<CellMark> for Status {
    fn from(mark: CellMark) -> Self {
        match mark {
            CellMark::Empty => Status::Pending,
            CellMark::Owned(player) => player.into(),
        }
    }
}

impl TryFrom<Status> for CellMark {
    type Error = &'static str;

    fn try_from(status: Status) -> Result<Self, Self::Error> {
        match status {
            Status::Pending => Ok(CellMark::Empty),
            Status::O => Ok(CellMark::Owned(Player::O)),
            Status::X => Ok(CellMark::Owned(Player::X)),
            Status::Tied => Err("a cell cannot be tied"),
        }
    }
}

/// Resolution of a quadrant or of the whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Status", from = "Status")]
pub enum Outcome {
    /// Still open.
    #[default]
    Pending,
    /// Every slot settled without a winning line.
    Tied,
    /// Won by a player.
    Decided(Player),
}

impl Outcome {
    /// Whether this outcome is still open.
    pub fn is_pending(self) -> bool {
        self == Outcome::Pending
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Decided(player) => Some(player),
            Outcome::Pending | Outcome::Tied => None,
        }
    }
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Pending => Status::Pending,
            Outcome::Tied => Status::Tied,
            Outcome::Decided(player) => player.into(),
        }
    }
}

impl From<Status> for Outcome {
    fn from(status: Status) -> Self {
        match status {
            Status::Pending => Outcome::Pending,
            Status::Tied => Outcome::Tied,
            Status::O => Outcome::Decided(Player::O),
            Status::X => Outcome::Decided(Player::X),
        }
    }
}

/// A single cell within a quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    #[serde(rename = "status")]
    mark: CellMark,
}

impl Cell {
    /// Returns the cell's mark.
    pub fn mark(&self) -> CellMark {
        self.mark
    }

    /// Checks if nobody has played here.
    pub fn is_empty(&self) -> bool {
        self.mark == CellMark::Empty
    }
}

/// One of the nine 3x3 sub-boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quadrant {
    /// Cells in row-major order (0-8).
    #[serde(rename = "state")]
    cells: [Cell; 9],
    status: Outcome,
    #[serde(rename = "is_interactive")]
    interactive: bool,
}

impl Quadrant {
    /// Creates an empty, pending, interactive quadrant.
    pub fn new() -> Self {
        Self {
            cells: [Cell::default(); 9],
            status: Outcome::Pending,
            interactive: true,
        }
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the quadrant's resolution.
    pub fn status(&self) -> Outcome {
        self.status
    }

    /// Whether the next move may target this quadrant.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub(crate) fn mark(&mut self, pos: Position, player: Player) {
        self.cells[pos.to_index()].mark = CellMark::Owned(player);
    }

    pub(crate) fn set_status(&mut self, status: Outcome) {
        self.status = status;
    }

    pub(crate) fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }
}

impl Default for Quadrant {
    fn default() -> Self {
        Self::new()
    }
}

/// The full game board: nine quadrants plus meta-level status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Quadrants in row-major order (0-8).
    #[serde(rename = "state")]
    quadrants: [Quadrant; 9],
    status: Outcome,
    next_player: Player,
}

impl Board {
    /// Creates a fresh board: everything pending and interactive, X to move.
    pub fn new() -> Self {
        Self {
            quadrants: std::array::from_fn(|_| Quadrant::new()),
            status: Outcome::Pending,
            next_player: Player::X,
        }
    }

    /// Gets the quadrant at the given position.
    pub fn quadrant(&self, pos: Position) -> &Quadrant {
        &self.quadrants[pos.to_index()]
    }

    /// Returns all quadrants.
    pub fn quadrants(&self) -> &[Quadrant; 9] {
        &self.quadrants
    }

    /// Returns the board's resolution.
    pub fn status(&self) -> Outcome {
        self.status
    }

    /// Returns the player whose turn it is.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Positions of quadrants the next move may target.
    pub fn interactive_quadrants(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&q| self.quadrant(q).is_interactive())
            .collect()
    }

    /// Every `(quadrant, cell)` pair the next player could legally mark.
    pub fn legal_moves(&self) -> Vec<(Position, Position)> {
        if !self.status.is_pending() {
            return Vec::new();
        }
        self.interactive_quadrants()
            .into_iter()
            .flat_map(|q| {
                Position::ALL
                    .into_iter()
                    .filter(move |&c| self.quadrant(q).cell(c).is_empty())
                    .map(move |c| (q, c))
            })
            .collect()
    }

    pub(crate) fn quadrant_mut(&mut self, pos: Position) -> &mut Quadrant {
        &mut self.quadrants[pos.to_index()]
    }

    pub(crate) fn quadrants_mut(&mut self) -> impl Iterator<Item = &mut Quadrant> {
        self.quadrants.iter_mut()
    }

    pub(crate) fn set_status(&mut self, status: Outcome) {
        self.status = status;
    }

    pub(crate) fn set_next_player(&mut self, player: Player) {
        self.next_player = player;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Renders the 81 cells as a 9x9 grid, quadrants separated by rules.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for meta_row in 0..3 {
            if meta_row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for cell_row in 0..3 {
                for meta_col in 0..3 {
                    if meta_col > 0 {
                        write!(f, "|")?;
                    }
                    let quadrant = &self.quadrants[meta_row * 3 + meta_col];
                    for cell_col in 0..3 {
                        let symbol = match quadrant.cells[cell_row * 3 + cell_col].mark {
                            CellMark::Empty => '.',
                            CellMark::Owned(Player::X) => 'X',
                            CellMark::Owned(Player::O) => 'O',
                        };
                        write!(f, "{}", symbol)?;
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
