//! A solver for generalized N×N Sudoku puzzles (block dimension
//! configurable), built on backtracking search guided by a
//! minimum-remaining-values heuristic.

/// The `solver` module contains the solver engine and its I/O boundary.
pub mod solver;
