//! Packed cell state for the toggle grid.

/// The lit/unlit state of up to 64 cells, one bit per cell.
///
/// Cells are indexed in row-major order (`row * n + col`), so the whole
/// state of even an 8x8 grid fits in a single `u64`. That makes the win
/// test (`is_empty`), bulk snapshots, and restores O(1) bit operations.
///
/// `CellMask` itself does not know the grid dimension; [`Grid`] is
/// responsible for keeping bits at or above `n * n` cleared.
///
/// [`Grid`]: crate::Grid
///
/// # Examples
///
/// ```
/// use lightsoff_core::CellMask;
///
/// let mut mask = CellMask::EMPTY;
/// mask.set(3, true);
/// mask.toggle(7);
///
/// assert!(mask.get(3));
/// assert!(mask.get(7));
/// assert_eq!(mask.len(), 2);
///
/// mask.toggle(7);
/// assert!(!mask.get(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellMask(u64);

impl CellMask {
    /// The all-off mask: every cell unlit. This is the win state.
    pub const EMPTY: Self = Self(0);

    /// Creates a mask from raw bits.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns whether the cell at `index` is lit.
    ///
    /// Indices 64 and above are always unlit.
    #[must_use]
    pub const fn get(self, index: usize) -> bool {
        index < 64 && (self.0 >> index) & 1 == 1
    }

    /// Sets the cell at `index` to `lit`. Indices 64 and above are ignored.
    pub const fn set(&mut self, index: usize, lit: bool) {
        if index < 64 {
            if lit {
                self.0 |= 1 << index;
            } else {
                self.0 &= !(1 << index);
            }
        }
    }

    /// Flips the cell at `index`. Indices 64 and above are ignored.
    pub const fn toggle(&mut self, index: usize) {
        if index < 64 {
            self.0 ^= 1 << index;
        }
    }

    /// Returns whether every cell is off.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of lit cells.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_lit_cells() {
        assert!(CellMask::EMPTY.is_empty());
        assert_eq!(CellMask::EMPTY.len(), 0);
        assert!(!CellMask::EMPTY.get(0));
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut mask = CellMask::EMPTY;
        mask.set(0, true);
        mask.set(63, true);
        assert!(mask.get(0));
        assert!(mask.get(63));
        assert_eq!(mask.len(), 2);

        mask.set(0, false);
        assert!(!mask.get(0));
        assert_eq!(mask.len(), 1);
    }

    #[test]
    fn toggle_is_self_inverse() {
        let mut mask = CellMask::from_bits(0b1010);
        mask.toggle(5);
        assert!(mask.get(5));
        mask.toggle(5);
        assert_eq!(mask, CellMask::from_bits(0b1010));
    }

    #[test]
    fn out_of_range_access_is_ignored() {
        let mut mask = CellMask::EMPTY;
        mask.set(64, true);
        mask.toggle(100);
        assert!(mask.is_empty());
        assert!(!mask.get(64));
    }

    #[test]
    fn bits_roundtrip() {
        let mask = CellMask::from_bits(0x0002_3880);
        assert_eq!(mask.bits(), 0x0002_3880);
        assert_eq!(mask.len(), 5);
    }
}
