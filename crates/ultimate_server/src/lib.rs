//! HTTP transport for the ultimate tic-tac-toe engine.
//!
//! Serves one shared game at `/board`:
//!
//! - `GET /board` - current board
//! - `PUT /board?player=X&quad_index=0&cell_index=4` - play a move
//! - `DELETE /board` - start over
//! - `GET /board/history` - accepted moves, oldest first

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod config;

pub use api::{ApiError, AppState, MoveQuery, router};
pub use config::{ConfigError, ServerConfig};
