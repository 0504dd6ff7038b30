//! Core engine for the classic 3x3 sliding-tile puzzle.
//!
//! The board starts solved, gets scrambled by a [`Shuffler`], and is restored
//! one [`Grid::slide`] at a time. The crate knows nothing about terminals or
//! rendering; front ends drive it through [`Grid`] and [`Direction`] and draw
//! the state however they like.

mod direction;
mod grid;
mod shuffle;

pub use direction::Direction;
pub use grid::{Cell, Grid, Position, EMPTY_SYMBOL, SIZE, TILE_COUNT};
pub use shuffle::{Shuffler, ShufflerConfig};
