#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Mutable grid state for a generalized Sudoku board.
//!
//! A board has a block dimension `size` and a grid dimension `n = size²`.
//! Cells are stored flat in row-major order; `0` marks a cell whose value
//! has not been revealed yet. Blocks are numbered row-major, left to right
//! and top to bottom, each spanning a `size × size` sub-grid.

use rustc_hash::FxHashSet;

/// Marker stored in cells whose value has not been revealed.
pub const EMPTY: u32 = 0;

/// The grid of a generalized Sudoku puzzle.
///
/// `Board` is pure state: `set` and `clear` mutate cells directly and leave
/// any derived candidate bookkeeping to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    n: usize,
    cells: Vec<u32>,
}

impl Board {
    /// Creates an all-empty board with block dimension `size`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let n = size * size;
        Self {
            size,
            n,
            cells: vec![EMPTY; n * n],
        }
    }

    /// Creates a board from `n * n` row-major cell values.
    ///
    /// # Panics
    ///
    /// Panics if `cells` does not hold exactly `n * n` values.
    #[must_use]
    pub fn from_cells(size: usize, cells: Vec<u32>) -> Self {
        let n = size * size;
        assert_eq!(cells.len(), n * n, "expected {} cells, got {}", n * n, cells.len());
        Self { size, n, cells }
    }

    /// The block dimension of the board.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The grid dimension, `size²`.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// The value at `(row, col)`, `EMPTY` if unrevealed.
    #[must_use]
    pub fn value(&self, row: usize, col: usize) -> u32 {
        self.cells[row * self.n + col]
    }

    /// Whether the cell at `(row, col)` is still unrevealed.
    #[must_use]
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.value(row, col) == EMPTY
    }

    /// Writes `value` at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row * self.n + col] = value;
    }

    /// Marks the cell at `(row, col)` unrevealed again.
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row * self.n + col] = EMPTY;
    }

    /// The index of the block containing `(row, col)`.
    #[must_use]
    pub const fn block_of(&self, row: usize, col: usize) -> usize {
        (row / self.size) * self.size + col / self.size
    }

    /// The `(row, col)` of position `index` within `block`, where `index`
    /// walks the block row-major in `0..n`.
    #[must_use]
    pub const fn block_coords(&self, block: usize, index: usize) -> (usize, usize) {
        let row_base = (block / self.size) * self.size;
        let col_base = (block % self.size) * self.size;
        (row_base + index / self.size, col_base + index % self.size)
    }

    /// The `n` current values of `row`, empty markers included.
    #[must_use]
    pub fn row_values(&self, row: usize) -> Vec<u32> {
        self.cells[row * self.n..(row + 1) * self.n].to_vec()
    }

    /// The `n` current values of `col`, empty markers included.
    #[must_use]
    pub fn col_values(&self, col: usize) -> Vec<u32> {
        (0..self.n).map(|row| self.value(row, col)).collect()
    }

    /// The `n` current values of `block` in block traversal order, empty
    /// markers included.
    #[must_use]
    pub fn block_values(&self, block: usize) -> Vec<u32> {
        (0..self.n)
            .map(|index| {
                let (row, col) = self.block_coords(block, index);
                self.value(row, col)
            })
            .collect()
    }

    /// Whether every cell holds a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&value| value != EMPTY)
    }

    /// Whether the currently revealed values respect uniqueness: no value
    /// occurs twice in any row, column or block.
    ///
    /// Empty cells are ignored, so this also validates a partially filled
    /// seed before search begins.
    #[must_use]
    pub fn givens_consistent(&self) -> bool {
        (0..self.n).all(|group| {
            group_distinct(&self.row_values(group))
                && group_distinct(&self.col_values(group))
                && group_distinct(&self.block_values(group))
        })
    }

    /// Whether the board is a valid completed solution: no empty markers
    /// and every row, column and block holds exactly the values `1..=n`.
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        self.is_complete()
            && (0..self.n).all(|group| {
                self.group_complete(&self.row_values(group))
                    && self.group_complete(&self.col_values(group))
                    && self.group_complete(&self.block_values(group))
            })
    }

    fn group_complete(&self, values: &[u32]) -> bool {
        let seen: FxHashSet<u32> = values.iter().copied().collect();
        seen.len() == self.n && values.iter().all(|&value| (1..=self.n as u32).contains(&value))
    }
}

fn group_distinct(values: &[u32]) -> bool {
    let mut seen = FxHashSet::default();
    values
        .iter()
        .filter(|&&value| value != EMPTY)
        .all(|&value| seen.insert(value))
}
