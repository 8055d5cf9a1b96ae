#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Minimum-remaining-values position selection.
//!
//! The selector picks the empty cell with the fewest legal values, which
//! is the dominant performance lever of the whole search: without it the
//! backtracking degenerates to brute force on hard puzzles.

use crate::solver::board::Board;
use crate::solver::candidates::CandidateTracker;

/// Outcome of a selection pass over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The empty cell the search should fill next.
    Cell(usize, usize),
    /// No empty cell remains; the board is complete.
    Complete,
    /// Some empty cell has no legal value; the current branch is dead.
    Stuck,
}

/// Scans all empty cells in row-major order and returns the one with the
/// fewest possible values.
///
/// Two short-circuits keep the scan cheap, and both are load-bearing:
/// a cell with zero candidates ends the scan with [`Position::Stuck`]
/// (nothing found later could rescue the branch), and a cell with exactly
/// one candidate is returned at once (it cannot be beaten). Ties go to the
/// first cell seen in row-major order.
#[must_use]
pub fn next_position(board: &Board, candidates: &CandidateTracker) -> Position {
    let n = board.n();
    let mut best = None;
    let mut best_count = n + 1;

    for row in 0..n {
        for col in 0..n {
            if !board.is_empty_cell(row, col) {
                continue;
            }
            let count = candidates.possible_values(row, col).len();
            if count == 0 {
                return Position::Stuck;
            }
            if count < best_count {
                if count == 1 {
                    return Position::Cell(row, col);
                }
                best = Some((row, col));
                best_count = count;
            }
        }
    }

    best.map_or(Position::Complete, |(row, col)| Position::Cell(row, col))
}
