//! A Game of Life engine on a fixed-size toroidal board.
//!
//! The board wraps at its edges: a cell on the left border is a neighbour of
//! the cell on the right border of the same row, and likewise for the top and
//! bottom rows. Every generation is computed from a snapshot of the previous
//! one, so births and deaths happen simultaneously.

mod error;
mod grid;
mod pattern;


pub use error::Error;
pub use grid::Grid;
pub use pattern::Pattern;
