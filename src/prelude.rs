//! Commonly used types and utilities for ease of import.

pub use crate::{
    BoardError, CellView, FireOutcome, GameBoard, GameConfig, GameStatus, Orientation,
    ShipSnapshot,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, render::render_board, render::status_line};
