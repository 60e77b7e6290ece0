//! Grid side length and its derived limits.

use derive_more::{Display, Error};

/// Maximum selectable random level per dimension, 3x3 through 8x8.
///
/// For the dimensions whose press matrix has nullity 0 (3, 6, 7, 8) the
/// deepest meaningful puzzle would be n*n moves, but that solution is just
/// pressing every cell, so those entries are capped one below it.
const MAX_MOVES: [u8; Dimension::SPAN] = [8, 7, 15, 35, 48, 63];

/// Error returned when a grid dimension is outside the supported 3-8 range.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("grid dimension must be between 3 and 8, got {value}")]
pub struct DimensionError {
    /// The rejected dimension value.
    pub value: u8,
}

/// Side length of the square toggle grid, in the range 3-8.
///
/// The upper bound keeps the whole grid state within a single 64-bit
/// [`CellMask`](crate::CellMask) (8 * 8 = 64 cells).
///
/// # Examples
///
/// ```
/// use lightsoff_core::Dimension;
///
/// let dimension = Dimension::new(5)?;
/// assert_eq!(dimension.cell_count(), 25);
/// assert_eq!(dimension, Dimension::default());
///
/// assert!(Dimension::new(9).is_err());
/// # Ok::<(), lightsoff_core::DimensionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{_0}x{_0}")]
pub struct Dimension(u8);

impl Dimension {
    /// The smallest supported grid, 3x3.
    pub const MIN: Self = Self(3);
    /// The largest supported grid, 8x8.
    pub const MAX: Self = Self(8);
    /// Number of supported dimensions (3 through 8 inclusive).
    pub const SPAN: usize = 6;

    /// Creates a dimension, rejecting values outside 3-8.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] if `value` is not in the range 3-8.
    pub const fn new(value: u8) -> Result<Self, DimensionError> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(DimensionError { value })
        }
    }

    /// Returns the side length as a plain integer.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the number of cells in the grid (n squared).
    #[must_use]
    pub fn cell_count(self) -> usize {
        usize::from(self.0) * usize::from(self.0)
    }

    /// Returns the number of selectable random levels for this dimension.
    ///
    /// Level indices in random mode range over `0..max_moves()`; level `k`
    /// is dealt with `k + 1` simulated presses.
    #[must_use]
    pub fn max_moves(self) -> usize {
        usize::from(MAX_MOVES[self.offset()])
    }

    /// Returns this dimension's zero-based offset from [`Dimension::MIN`].
    ///
    /// Used to index per-dimension tables such as the persisted
    /// last-played-level array.
    #[must_use]
    pub fn offset(self) -> usize {
        usize::from(self.0 - Self::MIN.0)
    }

    /// Returns an iterator over all supported dimensions, smallest first.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN.0..=Self::MAX.0).map(Self)
    }
}

impl Default for Dimension {
    /// Returns the default 5x5 dimension.
    fn default() -> Self {
        Self(5)
    }
}
