//! Game rules for ultimate tic-tac-toe.
//!
//! Pure functions over board state. Line detection and resolution are
//! written once against the [`Grid`] trait and reused for both the cells of
//! a quadrant and the quadrants of the board.

pub mod outcome;
pub mod routing;
pub mod win;

pub use outcome::{Grid, resolve};
pub use routing::route;
pub use win::{WINNING_LINES, has_line};
