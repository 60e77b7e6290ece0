//! The n-by-n toggle grid and its press mechanics.

use crate::{CellMask, Dimension};

/// An n-by-n grid of lit/unlit cells with plus-shaped press propagation.
///
/// The grid owns its [`Dimension`] and a [`CellMask`] holding the cell
/// state. Bits at or above `n * n` are kept at zero: bulk writes are
/// truncated to the active window and out-of-range single-cell access is
/// silently ignored rather than treated as an error.
///
/// # Examples
///
/// ```
/// use lightsoff_core::{Dimension, Grid};
///
/// let mut grid = Grid::new(Dimension::new(3)?);
///
/// // Pressing a corner flips it and its two in-bounds neighbors.
/// grid.press(0);
/// assert!(grid.value_at(0));
/// assert!(grid.value_at(1));
/// assert!(grid.value_at(3));
/// assert!(!grid.value_at(4));
/// # Ok::<(), lightsoff_core::DimensionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimension: Dimension,
    cells: CellMask,
}

impl Grid {
    /// Creates an all-off grid of the given dimension.
    #[must_use]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            cells: CellMask::EMPTY,
        }
    }

    /// Returns the grid's dimension.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Returns the number of cells in the active window.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.dimension.cell_count()
    }

    /// Changes the dimension, clearing every cell to off.
    pub fn set_dimension(&mut self, dimension: Dimension) {
        self.dimension = dimension;
        self.cells = CellMask::EMPTY;
    }

    /// Returns whether `index` falls inside the active n-by-n window.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index < self.cell_count()
    }

    /// Returns whether the cell at `index` is lit.
    ///
    /// Out-of-range indices are unlit.
    #[must_use]
    pub fn value_at(&self, index: usize) -> bool {
        self.contains(index) && self.cells.get(index)
    }

    /// Sets the cell at `index`. Out-of-range indices are ignored.
    pub fn set_value(&mut self, index: usize, lit: bool) {
        if self.contains(index) {
            self.cells.set(index, lit);
        }
    }

    /// Returns the whole cell state as a bitmask snapshot.
    #[must_use]
    pub fn values(&self) -> CellMask {
        self.cells
    }

    /// Replaces the whole cell state, truncated to the active window.
    pub fn set_values(&mut self, values: CellMask) {
        self.cells = CellMask::from_bits(values.bits() & self.window());
    }

    /// Returns whether every cell is off (the win state).
    #[must_use]
    pub fn is_all_off(&self) -> bool {
        self.cells.is_empty()
    }

    /// Applies the plus-shaped flip: the cell at `index` plus its in-bounds
    /// orthogonal neighbors.
    ///
    /// Returns `false` without changing anything if `index` is outside the
    /// active window.
    pub fn press(&mut self, index: usize) -> bool {
        if !self.contains(index) {
            return false;
        }

        let n = usize::from(self.dimension.get());
        self.cells.toggle(index);

        if index % n != 0 {
            // not the leftmost column
            self.cells.toggle(index - 1);
        }
        if (index + 1) % n != 0 {
            // not the rightmost column
            self.cells.toggle(index + 1);
        }
        if index >= n {
            // not the top row
            self.cells.toggle(index - n);
        }
        if index < n * (n - 1) {
            // not the bottom row
            self.cells.toggle(index + n);
        }
        true
    }

    fn window(&self) -> u64 {
        let cell_count = self.cell_count();
        if cell_count >= 64 {
            u64::MAX
        } else {
            (1 << cell_count) - 1
        }
    }
}
