//! Game rules for Snake, free of windowing and rendering.

pub mod apple;
pub mod board;
pub mod cell;
pub mod state;

pub use board::Board;
pub use cell::{Cell, Direction};
pub use state::{Collision, GameState, TickOutcome};
