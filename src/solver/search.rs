#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The recursive search/backtrack driver.
//!
//! Depth-first search over cells picked by the MRV selector. Every forward
//! placement is mirrored by a [`Move`] on an explicit undo log, so a failed
//! branch is unwound exactly: pop the move, clear the cell, re-add the
//! value to the three unknown sets. Backtracking here is the search
//! strategy itself, a deterministic re-exploration of the space, not a
//! response to faults.
//!
//! Recursion depth is bounded by the number of empty cells (at most `n²`),
//! so very large boards need call-stack headroom to match.

use crate::solver::board::Board;
use crate::solver::candidates::CandidateTracker;
use crate::solver::selection::{Position, next_position};
use log::{debug, trace};
use smallvec::SmallVec;

/// One recorded placement, carrying everything needed to invert it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Row of the placed cell.
    pub row: usize,
    /// Column of the placed cell.
    pub col: usize,
    /// Block containing the placed cell.
    pub block: usize,
    /// The value that was placed.
    pub value: u32,
}

/// Terminal outcome of a solve.
///
/// An unsolvable puzzle is a normal outcome the caller must check for, not
/// an error: the board is left with its original givens intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A complete, valid assignment was found and left on the board.
    Solved,
    /// The search space was exhausted without a solution.
    Unsolvable,
}

/// Counters accumulated over one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search nodes visited, terminal ones included.
    pub nodes: usize,
    /// Values placed on the board.
    pub placements: usize,
    /// Moves undone after a failed branch.
    pub backtracks: usize,
}

/// Backtracking Sudoku solver over one exclusively owned board.
///
/// The board, the candidate tracker and the undo log all belong to a
/// single in-flight solve; nothing else may mutate them while it runs.
#[derive(Debug, Clone)]
pub struct Solver {
    board: Board,
    candidates: CandidateTracker,
    moves: Vec<Move>,
    stats: SearchStats,
}

impl Solver {
    /// Creates a solver for `board`, scanning its groups once to seed the
    /// candidate tracker.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let candidates = CandidateTracker::scan(&board);
        Self {
            board,
            candidates,
            moves: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// The board in its current state: the solution after a successful
    /// solve, the original givens after an unsolvable one.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the solver and returns the board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Counters for the most recent solve.
    #[must_use]
    pub const fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Runs the search to completion.
    ///
    /// A seed that already violates uniqueness is rejected up front:
    /// `Position::Complete` alone cannot tell a solved board from a full
    /// board with duplicate givens.
    pub fn solve(&mut self) -> Outcome {
        debug_assert!(self.moves.is_empty(), "undo log must be empty before a solve");

        if !self.board.givens_consistent() {
            debug!("givens violate uniqueness, puzzle rejected without search");
            return Outcome::Unsolvable;
        }

        let first = next_position(&self.board, &self.candidates);
        if self.solve_at(first) {
            debug_assert!(self.board.is_valid_solution());
            // The solution stays in place; the spent log is discarded.
            self.moves.clear();
            debug!(
                "solved: {} nodes, {} placements, {} backtracks",
                self.stats.nodes, self.stats.placements, self.stats.backtracks
            );
            Outcome::Solved
        } else {
            debug_assert!(self.moves.is_empty(), "root failure must unwind every move");
            debug!(
                "unsolvable: {} nodes, {} placements, {} backtracks",
                self.stats.nodes, self.stats.placements, self.stats.backtracks
            );
            Outcome::Unsolvable
        }
    }

    /// Tries every candidate value at `position`, recursing on the next
    /// MRV pick after each placement. Returns `true` once a branch reaches
    /// a complete board; a `false` return has already undone every move
    /// this call made.
    fn solve_at(&mut self, position: Position) -> bool {
        self.stats.nodes += 1;

        let (row, col) = match position {
            Position::Complete => return true,
            Position::Stuck => return false,
            Position::Cell(row, col) => (row, col),
        };

        let block = self.board.block_of(row, col);
        // Snapshot the candidates: the tracker changes under recursion.
        let values: SmallVec<[u32; 16]> = self.candidates.possible_values(row, col).iter().collect();

        for value in values {
            self.place(row, col, block, value);
            if self.solve_at(next_position(&self.board, &self.candidates)) {
                return true;
            }
            self.backtrack();
        }

        false
    }

    fn place(&mut self, row: usize, col: usize, block: usize, value: u32) {
        trace!("place {value} at ({row}, {col})");
        self.board.set(row, col, value);
        self.candidates.place(row, col, block, value);
        self.moves.push(Move {
            row,
            col,
            block,
            value,
        });
        self.stats.placements += 1;
    }

    /// Pops the most recent move and undoes it on the board and tracker.
    fn backtrack(&mut self) {
        let last = self.moves.pop().expect("backtrack with an empty undo log");
        trace!("undo {} at ({}, {})", last.value, last.row, last.col);
        self.board.clear(last.row, last.col);
        self.candidates
            .unplace(last.row, last.col, last.block, last.value);
        self.stats.backtracks += 1;
    }
}
