use std::fmt::Debug;

/// Trait for square grids of edge flags backing an
/// [`AdjacencyMatrixGraph`](super::AdjacencyMatrixGraph).
///
/// The grid itself does not enforce symmetry; the graph sets and clears
/// both `(row, col)` and `(col, row)`.  Callers must keep `row` and `col`
/// below [`Self::size`].
pub trait FlagMatrix: Clone + Debug + PartialEq + Eq {
    /// Creates a `size`×`size` grid with every flag cleared.
    fn with_size(size: usize) -> Self;

    /// Returns the number of rows (and columns).
    fn size(&self) -> usize;

    /// Gets the flag at `row` and `col`.
    fn get(&self, row: usize, col: usize) -> bool;

    /// Sets the flag at `row` and `col`.
    fn set(&mut self, row: usize, col: usize, flag: bool);

    /// Iterates over the columns whose flag is set in the given row, in
    /// increasing order.
    fn ones_in_row(&self, row: usize) -> impl Iterator<Item = usize> + '_;

    /// Returns the number of set flags.
    fn count_ones(&self) -> usize {
        (0..self.size())
            .map(|row| self.ones_in_row(row).count())
            .sum()
    }

    /// Clears every flag.
    fn clear(&mut self) {
        *self = Self::with_size(self.size());
    }
}

/// Gets the number of cells in a `size`×`size` grid.
///
/// # Panics
/// Panics if the count does not fit in a `usize`.
pub(super) fn cell_count(size: usize) -> usize {
    size.checked_mul(size)
        .unwrap_or_else(|| panic!("matrix size {size} overflows the cell count"))
}
