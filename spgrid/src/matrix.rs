//! Resizable sparse matrix over keyed storage
//!
//! The matrix owns its dimensions, a default value, and a keyed store of
//! explicitly written cells. Every stored key stays inside the current
//! bounds at all times: structural operations rekey or discard entries so
//! that a resize can never leave a stale out-of-range entry behind.

use core::hash::{Hash, Hasher};
use core::ops::Index;

use spgrid_core::{CellKey, GridError, KeyedStore, Result, SparseAccess};

use crate::store::HashStore;

/// A resizable two-dimensional matrix with sparse storage
///
/// Only cells that have been explicitly written occupy memory; every other
/// in-bounds cell reads as the matrix's default value. The storage backend
/// is pluggable through [`KeyedStore`]; it defaults to the hash map backend.
///
/// Reading outside the current bounds is an error, never a default-value
/// read. Structural operations (row/column insertion and deletion) shift
/// stored cells so that each one ends up at exactly one new key.
///
/// `Clone` performs an eager structural copy: the clone owns its own store,
/// so structural operations on either side never affect the other. Values
/// are duplicated with `T::clone`, which shares underlying data only when
/// the element type itself is a shared handle.
#[derive(Debug, Clone)]
pub struct SparseMatrix<T, S = HashStore<CellKey, T>> {
    width: usize,
    height: usize,
    default: T,
    cells: S,
}

impl<T: Default> SparseMatrix<T> {
    /// Create a matrix whose unwritten cells read as `T::default()`
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_default(width, height, T::default())
    }
}

impl<T> SparseMatrix<T> {
    /// Create a matrix whose unwritten cells read as `default`
    pub fn with_default(width: usize, height: usize, default: T) -> Self {
        Self {
            width,
            height,
            default,
            cells: HashStore::new(),
        }
    }
}

impl<T, S> SparseMatrix<T, S>
where
    S: KeyedStore<CellKey, T> + Default,
{
    /// Create a matrix over a caller-chosen store backend
    pub fn with_store(width: usize, height: usize, default: T) -> Self {
        Self {
            width,
            height,
            default,
            cells: S::default(),
        }
    }
}

impl<T, S> SparseMatrix<T, S>
where
    S: KeyedStore<CellKey, T>,
{
    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// The value unwritten cells read as
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Number of explicitly stored cells
    pub fn stored_len(&self) -> usize {
        self.cells.len()
    }

    /// Read the cell at the given position
    ///
    /// Returns the stored value if the cell has been written, the default
    /// value otherwise. Fails with [`GridError::OutOfBounds`] if either
    /// index is outside the current dimensions.
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        self.check_cell(row, col)?;
        Ok(self.value_at(row, col))
    }

    /// Write the cell at the given position
    ///
    /// Fails with [`GridError::OutOfBounds`] if either index is outside
    /// the current dimensions. A write the backend rejects is logged and
    /// dropped; the cell keeps its previous value.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check_cell(row, col)?;
        self.write_cell(CellKey::new(row, col), value);
        Ok(())
    }

    /// Insert a row of default values at `row`
    ///
    /// Every existing row at `row` or below shifts down by one. `row` may
    /// equal the current height to append at the bottom.
    pub fn insert_row(&mut self, row: usize) -> Result<()> {
        if row > self.height {
            return Err(GridError::OutOfBounds);
        }
        self.rekey_entries(|key| key.row >= row, |key| key.with_row(key.row + 1));
        self.height += 1;
        Ok(())
    }

    /// Insert a row populated with the given values at `row`
    ///
    /// `values` must hold exactly one value per column; otherwise the call
    /// fails with [`GridError::SizeMismatch`] and the matrix is unchanged.
    pub fn insert_row_values(&mut self, row: usize, values: &[T]) -> Result<()>
    where
        T: Clone,
    {
        if row > self.height {
            return Err(GridError::OutOfBounds);
        }
        if values.len() != self.width {
            return Err(GridError::SizeMismatch);
        }
        self.rekey_entries(|key| key.row >= row, |key| key.with_row(key.row + 1));
        self.height += 1;
        for (col, value) in values.iter().enumerate() {
            self.write_cell(CellKey::new(row, col), value.clone());
        }
        Ok(())
    }

    /// Insert a column of default values at `col`
    ///
    /// Every existing column at `col` or to its right shifts right by one.
    /// `col` may equal the current width to append on the right.
    pub fn insert_col(&mut self, col: usize) -> Result<()> {
        if col > self.width {
            return Err(GridError::OutOfBounds);
        }
        self.rekey_entries(|key| key.col >= col, |key| key.with_col(key.col + 1));
        self.width += 1;
        Ok(())
    }

    /// Insert a column populated with the given values at `col`
    ///
    /// `values` must hold exactly one value per row; otherwise the call
    /// fails with [`GridError::SizeMismatch`] and the matrix is unchanged.
    pub fn insert_col_values(&mut self, col: usize, values: &[T]) -> Result<()>
    where
        T: Clone,
    {
        if col > self.width {
            return Err(GridError::OutOfBounds);
        }
        if values.len() != self.height {
            return Err(GridError::SizeMismatch);
        }
        self.rekey_entries(|key| key.col >= col, |key| key.with_col(key.col + 1));
        self.width += 1;
        for (row, value) in values.iter().enumerate() {
            self.write_cell(CellKey::new(row, col), value.clone());
        }
        Ok(())
    }

    /// Delete the row at `row`, discarding its stored cells
    ///
    /// Every row below the deleted one shifts up by one.
    pub fn delete_row(&mut self, row: usize) -> Result<()> {
        if row >= self.height {
            return Err(GridError::OutOfBounds);
        }
        self.discard_entries(|key| key.row == row);
        self.rekey_entries(|key| key.row > row, |key| key.with_row(key.row - 1));
        self.height -= 1;
        Ok(())
    }

    /// Delete the column at `col`, discarding its stored cells
    ///
    /// Every column to the right of the deleted one shifts left by one.
    pub fn delete_col(&mut self, col: usize) -> Result<()> {
        if col >= self.width {
            return Err(GridError::OutOfBounds);
        }
        self.discard_entries(|key| key.col == col);
        self.rekey_entries(|key| key.col > col, |key| key.with_col(key.col - 1));
        self.width -= 1;
        Ok(())
    }

    /// Fill a rectangular region with `value`
    ///
    /// Start bounds are inclusive and must lie inside `[0, height]` /
    /// `[0, width]`; end bounds are exclusive and are clamped to the
    /// current dimensions, so a fill can never materialize an
    /// out-of-range entry.
    pub fn fill_region(
        &mut self,
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
        value: T,
    ) -> Result<()>
    where
        T: Clone,
    {
        self.check_start(start_row, start_col)?;
        let end_row = end_row.min(self.height);
        let end_col = end_col.min(self.width);
        for row in start_row..end_row {
            for col in start_col..end_col {
                self.write_cell(CellKey::new(row, col), value.clone());
            }
        }
        Ok(())
    }

    /// Fill a strided line with `value`
    ///
    /// Starting at `(start_row, start_col)`, writes the current cell and
    /// advances by `(delta_row, delta_col)` until either axis reaches its
    /// exclusive end bound. One algorithm covers horizontal, vertical, and
    /// diagonal fills. Cells the walk visits outside the current
    /// dimensions are skipped, matching the region-fill clamping.
    ///
    /// Termination is governed only by the end bounds: a stride that walks
    /// away from both bounds will not terminate, and choosing reachable
    /// bounds is the caller's responsibility. The one stride that can
    /// never terminate, zero on both axes, fails with
    /// [`GridError::ZeroStride`].
    #[allow(clippy::too_many_arguments)]
    pub fn fill_line(
        &mut self,
        start_row: usize,
        start_col: usize,
        delta_row: isize,
        delta_col: isize,
        end_row: usize,
        end_col: usize,
        value: T,
    ) -> Result<()>
    where
        T: Clone,
    {
        self.check_start(start_row, start_col)?;
        if delta_row == 0 && delta_col == 0 {
            return Err(GridError::ZeroStride);
        }
        let mut row = start_row as isize;
        let mut col = start_col as isize;
        while row < end_row as isize && col < end_col as isize {
            if row >= 0 && col >= 0 {
                let key = CellKey::new(row as usize, col as usize);
                if key.in_bounds(self.width, self.height) {
                    self.write_cell(key, value.clone());
                }
            }
            row += delta_row;
            col += delta_col;
        }
        Ok(())
    }

    /// Materialize a whole row, default-filled
    pub fn row_values(&self, row: usize) -> Result<Vec<&T>> {
        if row >= self.height {
            return Err(GridError::OutOfBounds);
        }
        Ok((0..self.width).map(|col| self.value_at(row, col)).collect())
    }

    /// Materialize a whole column, default-filled
    pub fn col_values(&self, col: usize) -> Result<Vec<&T>> {
        if col >= self.width {
            return Err(GridError::OutOfBounds);
        }
        Ok((0..self.height).map(|row| self.value_at(row, col)).collect())
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<()> {
        if CellKey::new(row, col).in_bounds(self.width, self.height) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds)
        }
    }

    // Fill starts may sit one past the end on either axis (an empty fill),
    // unlike cell reads and writes.
    fn check_start(&self, row: usize, col: usize) -> Result<()> {
        if row > self.height || col > self.width {
            Err(GridError::OutOfBounds)
        } else {
            Ok(())
        }
    }

    fn value_at(&self, row: usize, col: usize) -> &T {
        self.cells
            .get(&CellKey::new(row, col))
            .unwrap_or(&self.default)
    }

    // Bounds are validated before every store write, so a rejection here is
    // a backend fault, not a caller error: log it and leave the cell at its
    // previous value.
    fn write_cell(&mut self, key: CellKey, value: T) {
        if let Err(err) = self.cells.set(key, value) {
            tracing::warn!(row = key.row, col = key.col, %err, "store rejected cell write");
        }
    }

    // Remove every stored entry matching `affected`, then reinsert each one
    // under its remapped key. Removal completes before reinsertion starts,
    // so a shift can never collide with an entry it is about to move.
    fn rekey_entries(
        &mut self,
        affected: impl Fn(&CellKey) -> bool,
        remap: impl Fn(CellKey) -> CellKey,
    ) {
        let moved: Vec<(CellKey, T)> = self
            .cells
            .keys()
            .into_iter()
            .filter(|key| affected(key))
            .filter_map(|key| self.cells.remove(&key).map(|value| (key, value)))
            .collect();
        for (key, value) in moved {
            self.write_cell(remap(key), value);
        }
    }

    fn discard_entries(&mut self, affected: impl Fn(&CellKey) -> bool) {
        for key in self.cells.keys() {
            if affected(&key) {
                self.cells.remove(&key);
            }
        }
    }
}

impl<T, S> SparseAccess for SparseMatrix<T, S>
where
    S: KeyedStore<CellKey, T>,
{
    type Element = T;

    fn cell(&self, row: usize, col: usize) -> Option<&T> {
        let key = CellKey::new(row, col);
        if !key.in_bounds(self.width, self.height) {
            return None;
        }
        self.cells.get(&key)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    fn nnz(&self) -> usize {
        self.cells.len()
    }
}

/// Value-based structural equality
///
/// Two matrices are equal iff their dimensions match and every in-bounds
/// position reads the same value on both sides. Whether a given cell is
/// stored or read from the default is not observable and does not affect
/// equality, so matrices over different backends compare fine.
impl<T, S, S2> PartialEq<SparseMatrix<T, S2>> for SparseMatrix<T, S>
where
    T: PartialEq,
    S: KeyedStore<CellKey, T>,
    S2: KeyedStore<CellKey, T>,
{
    fn eq(&self, other: &SparseMatrix<T, S2>) -> bool {
        if self.width != other.width || self.height != other.height {
            return false;
        }
        (0..self.height).all(|row| {
            (0..self.width).all(|col| self.value_at(row, col) == other.value_at(row, col))
        })
    }
}

impl<T, S> Eq for SparseMatrix<T, S>
where
    T: Eq,
    S: KeyedStore<CellKey, T>,
{
}

/// Hashes dimensions and every observable value in row-major order, so two
/// matrices that compare equal hash identically regardless of which cells
/// each one actually stores.
impl<T, S> Hash for SparseMatrix<T, S>
where
    T: Hash,
    S: KeyedStore<CellKey, T>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
        for row in 0..self.height {
            for col in 0..self.width {
                self.value_at(row, col).hash(state);
            }
        }
    }
}

impl<T, S> Index<(usize, usize)> for SparseMatrix<T, S>
where
    S: KeyedStore<CellKey, T>,
{
    type Output = T;

    /// Panicking sugar over [`SparseMatrix::get`]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get(row, col).expect("cell position out of bounds")
    }
}
