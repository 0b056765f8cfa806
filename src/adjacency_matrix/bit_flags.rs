use bitvec::vec::BitVec;

use super::{FlagMatrix, trait_def::cell_count};

/// Flag grid packed into a bit vector, one bit per cell, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct BitvecFlags {
    size: usize,
    bits: BitVec,
}

impl BitvecFlags {
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }
}

impl FlagMatrix for BitvecFlags {
    fn with_size(size: usize) -> Self {
        Self {
            size,
            bits: BitVec::repeat(false, cell_count(size)),
        }
    }

    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, row: usize, col: usize) -> bool {
        self.bits[self.offset(row, col)]
    }

    fn set(&mut self, row: usize, col: usize, flag: bool) {
        let offset = self.offset(row, col);
        self.bits.set(offset, flag);
    }

    fn ones_in_row(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        let start = self.offset(row, 0);
        self.bits[start..start + self.size].iter_ones()
    }

    fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    fn clear(&mut self) {
        self.bits.fill(false);
    }
}
