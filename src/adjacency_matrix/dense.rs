use super::{FlagMatrix, trait_def::cell_count};

/// Flag grid storing one byte (`0` or `1`) per cell, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DenseFlags {
    size: usize,
    cells: Vec<u8>,
}

impl DenseFlags {
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }
}

impl FlagMatrix for DenseFlags {
    fn with_size(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; cell_count(size)],
        }
    }

    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.offset(row, col)] == 1
    }

    fn set(&mut self, row: usize, col: usize, flag: bool) {
        let offset = self.offset(row, col);
        self.cells[offset] = u8::from(flag);
    }

    fn ones_in_row(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        let start = self.offset(row, 0);
        self.cells[start..start + self.size]
            .iter()
            .enumerate()
            .filter_map(|(col, &cell)| (cell == 1).then_some(col))
    }

    fn count_ones(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == 1).count()
    }

    fn clear(&mut self) {
        self.cells.fill(0);
    }
}
