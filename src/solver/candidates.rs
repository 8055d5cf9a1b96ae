#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Incremental candidate tracking for the solver engine.
//!
//! For every row, column and block the tracker keeps the set of values in
//! `1..=n` that do not appear in that group yet, as a bitset with bit
//! `v - 1` standing for value `v`. The sets are computed once by a full
//! scan when a puzzle is loaded and maintained in O(1) amortized time per
//! placement or undo afterwards; they are never rescanned during search.

use crate::solver::board::{Board, EMPTY};
use bit_vec::BitVec;

/// The values in `1..=n` absent from a group's `n` current values.
///
/// This full scan runs once per group at load time; all later updates go
/// through [`CandidateTracker::place`] and [`CandidateTracker::unplace`].
#[must_use]
pub fn unknowns_of(n: usize, values: &[u32]) -> BitVec {
    let mut unknowns = BitVec::from_elem(n, true);
    for &value in values {
        if value != EMPTY && (value as usize) <= n {
            unknowns.set(value as usize - 1, false);
        }
    }
    unknowns
}

/// The legal values for one cell: the intersection of the unknown sets of
/// its row, column and block.
///
/// An empty set is the normal dead-end signal during search, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet(BitVec);

impl CandidateSet {
    /// The number of candidate values in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.iter().filter(|&bit| bit).count()
    }

    /// Whether no legal value remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.0.any()
    }

    /// Whether `value` is a member of the set.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        value >= 1 && self.0.get(value as usize - 1).unwrap_or(false)
    }

    /// The candidate values in ascending order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, bit)| bit.then_some(index as u32 + 1))
    }
}

/// Per-group unknown-value sets, kept in lock step with a [`Board`].
///
/// Invariant: a value `v` is absent from the row set of row `r` iff some
/// cell of row `r` currently holds `v`, and likewise for columns and
/// blocks. [`place`](Self::place) and [`unplace`](Self::unplace) are exact
/// inverses, so a search that pairs them correctly preserves the invariant
/// at every step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateTracker {
    size: usize,
    n: usize,
    rows: Vec<BitVec>,
    cols: Vec<BitVec>,
    blocks: Vec<BitVec>,
}

impl CandidateTracker {
    /// Builds the three set families by scanning every group of `board`.
    #[must_use]
    pub fn scan(board: &Board) -> Self {
        let n = board.n();
        Self {
            size: board.size(),
            n,
            rows: (0..n).map(|row| unknowns_of(n, &board.row_values(row))).collect(),
            cols: (0..n).map(|col| unknowns_of(n, &board.col_values(col))).collect(),
            blocks: (0..n)
                .map(|block| unknowns_of(n, &board.block_values(block)))
                .collect(),
        }
    }

    /// The values that can be legally placed at `(row, col)`.
    #[must_use]
    pub fn possible_values(&self, row: usize, col: usize) -> CandidateSet {
        let block = (row / self.size) * self.size + col / self.size;
        let mut set = self.rows[row].clone();
        set.intersect(&self.cols[col]);
        set.intersect(&self.blocks[block]);
        CandidateSet(set)
    }

    /// Records that `value` was placed at `(row, col)` in `block`, removing
    /// it from the three relevant unknown sets.
    pub fn place(&mut self, row: usize, col: usize, block: usize, value: u32) {
        let bit = value as usize - 1;
        debug_assert!(
            self.rows[row][bit] && self.cols[col][bit] && self.blocks[block][bit],
            "placing {value} at ({row}, {col}) but it is already present in a group"
        );
        self.rows[row].set(bit, false);
        self.cols[col].set(bit, false);
        self.blocks[block].set(bit, false);
    }

    /// Exact inverse of [`place`](Self::place) for the same arguments:
    /// re-adds `value` to the three relevant unknown sets.
    pub fn unplace(&mut self, row: usize, col: usize, block: usize, value: u32) {
        let bit = value as usize - 1;
        debug_assert!(
            !self.rows[row][bit] && !self.cols[col][bit] && !self.blocks[block][bit],
            "undoing {value} at ({row}, {col}) but it was never placed"
        );
        self.rows[row].set(bit, true);
        self.cols[col].set(bit, true);
        self.blocks[block].set(bit, true);
    }
}
