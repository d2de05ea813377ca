//! Cell identity for sparse grid storage
//!
//! A key is a width-independent `(row, col)` pair, so changing the grid's
//! width never requires re-encoding entries that do not move. Structural
//! operations reconcile logical positions by rewriting only the keys on the
//! affected side of the insertion or deletion point.

/// Identifies one cell of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellKey {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl CellKey {
    /// Create a key for the given position
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check that the key addresses a cell inside a width x height grid
    pub const fn in_bounds(&self, width: usize, height: usize) -> bool {
        self.row < height && self.col < width
    }

    /// The same column in a different row
    pub const fn with_row(self, row: usize) -> Self {
        Self { row, col: self.col }
    }

    /// The same row in a different column
    pub const fn with_col(self, col: usize) -> Self {
        Self { row: self.row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(CellKey::new(0, 0).in_bounds(1, 1));
        assert!(CellKey::new(2, 3).in_bounds(4, 3));

        // One past the end on either axis is out
        assert!(!CellKey::new(3, 0).in_bounds(4, 3));
        assert!(!CellKey::new(0, 4).in_bounds(4, 3));
        assert!(!CellKey::new(0, 0).in_bounds(0, 0));
    }

    #[test]
    fn test_shift_helpers() {
        let key = CellKey::new(2, 5);
        assert_eq!(key.with_row(3), CellKey::new(3, 5));
        assert_eq!(key.with_col(4), CellKey::new(2, 4));
    }
}
