//! Core Connect Four game logic: board representation, player types, and
//! the turn-state engine.

mod board;
mod engine;
mod player;

pub use board::{Board, Cell, COLS, ROWS};
pub use engine::{DropResult, GameEngine, GameStatus};
pub use player::Player;
