//! Core data structures for the Lights Off toggle grid.
//!
//! This crate provides the grid state and press mechanics shared by puzzle
//! generation and game session management:
//!
//! - [`dimension`]: the validated grid side length (3-8) and the
//!   per-dimension random-mode move ceiling
//! - [`mask`]: [`CellMask`], the packed one-bit-per-cell grid state
//! - [`grid`]: [`Grid`], which combines a dimension with a mask and applies
//!   the plus-shaped press propagation
//!
//! # Examples
//!
//! ```
//! use lightsoff_core::{Dimension, Grid};
//!
//! let mut grid = Grid::new(Dimension::default());
//!
//! // Pressing the center of a 5x5 grid lights it and its four neighbors.
//! grid.press(12);
//! assert_eq!(grid.values().bits(), 0x0002_3880);
//!
//! // A press is its own inverse.
//! grid.press(12);
//! assert!(grid.is_all_off());
//! ```

pub mod dimension;
pub mod grid;
pub mod mask;

pub use self::{
    dimension::{Dimension, DimensionError},
    grid::Grid,
    mask::CellMask,
};
