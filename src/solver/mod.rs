#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The solver engine: board state, incremental candidate tracking, MRV
//! position selection and the backtracking search driver, plus the
//! reader/printer collaborators at its boundary.

pub mod board;
pub mod candidates;
pub mod printer;
pub mod reader;
pub mod search;
pub mod selection;
