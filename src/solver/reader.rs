#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Text ingestion for puzzle files.
//!
//! A puzzle is a stream of whitespace-separated tokens: first the block
//! dimension `size` (accepted range `1..=100`), then exactly `n * n` cell
//! tokens in row-major order, where `n = size²`. A cell token is either a
//! base-10 integer in `1..=n` (`0` for an unrevealed cell) or the literal
//! `x`, equivalent to `0`. A value outside the grid's range is rejected
//! here; the engine never sees a board it could not legally complete.
//!
//! In the default lenient mode any other token is silently skipped while
//! scanning for the next integer, so puzzle files may carry free-form
//! decoration between values; existing files rely on this. Strict mode
//! turns such tokens into errors instead.

use crate::solver::board::Board;
use log::{debug, trace, warn};
use std::io::{self, Read};
use thiserror::Error;

/// How non-integer, non-`x` tokens in the stream are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenMode {
    /// Skip unrecognized tokens silently (compatible with existing files).
    #[default]
    Lenient,
    /// Reject the stream on the first unrecognized token.
    Strict,
}

/// Failures while reading a puzzle. All of these are fatal at the
/// boundary; the solver engine never sees a partially loaded board.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The size token was outside the accepted range.
    #[error("the Sudoku puzzle size must be between 1 and 100, got {0}")]
    SizeOutOfRange(i64),
    /// The stream ended before a size token was found.
    #[error("puzzle stream ended before a size was read")]
    MissingSize,
    /// The stream ended before all cell values were read.
    #[error("puzzle stream ended after {found} of {expected} cell values")]
    TruncatedGrid {
        /// Number of cell values the grid requires.
        expected: usize,
        /// Number of cell values actually read.
        found: usize,
    },
    /// A cell value outside the range the grid can hold.
    #[error("cell value {value} is outside 1..={max}")]
    ValueOutOfRange {
        /// The offending value.
        value: u32,
        /// The largest value the grid admits, `n`.
        max: u32,
    },
    /// Strict mode only: a token that is neither an integer nor `x`.
    #[error("unexpected token {0:?} in puzzle stream")]
    BadToken(String),
    /// The underlying stream failed.
    #[error("failed to read puzzle stream: {0}")]
    Io(#[from] io::Error),
}

/// Reads a complete puzzle from `input`.
///
/// # Errors
///
/// Returns a [`ReadError`] if the stream cannot be read, the size is out
/// of range, the grid is truncated, or (in strict mode) a garbage token
/// appears.
pub fn read_board<R: Read>(mut input: R, mode: TokenMode) -> Result<Board, ReadError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    parse_board(&text, mode)
}

/// Parses a complete puzzle from an in-memory string.
///
/// # Errors
///
/// Same conditions as [`read_board`], minus the I/O case.
pub fn parse_board(text: &str, mode: TokenMode) -> Result<Board, ReadError> {
    let mut tokens = text.split_whitespace();

    let size = match next_size(&mut tokens, mode)? {
        None => return Err(ReadError::MissingSize),
        Some(size) if !(1..=100).contains(&size) => return Err(ReadError::SizeOutOfRange(size)),
        #[allow(clippy::cast_sign_loss)]
        Some(size) => size as usize,
    };

    let n = size * size;
    let expected = n * n;
    #[allow(clippy::cast_possible_truncation)]
    let max = n as u32;
    let mut cells = Vec::with_capacity(expected);
    while cells.len() < expected {
        match next_cell(&mut tokens, mode)? {
            Some(value) if value > max => {
                return Err(ReadError::ValueOutOfRange { value, max });
            }
            Some(value) => cells.push(value),
            None => {
                return Err(ReadError::TruncatedGrid {
                    expected,
                    found: cells.len(),
                });
            }
        }
    }

    debug!(
        "read a {n}x{n} puzzle with {} givens",
        cells.iter().filter(|&&value| value != 0).count()
    );
    Ok(Board::from_cells(size, cells))
}

/// The next size token: any integer, with `x` standing for 0 as it does
/// for cells (and therefore rejected by the range check above).
fn next_size<'a, I>(tokens: &mut I, mode: TokenMode) -> Result<Option<i64>, ReadError>
where
    I: Iterator<Item = &'a str>,
{
    for token in tokens.by_ref() {
        if token == "x" {
            return Ok(Some(0));
        }
        if let Ok(value) = token.parse::<i64>() {
            return Ok(Some(value));
        }
        if mode == TokenMode::Strict {
            return Err(ReadError::BadToken(token.to_string()));
        }
        trace!("skipping token {token:?}");
    }
    Ok(None)
}

/// The next cell token: a non-negative integer placed verbatim, or `x`
/// for an unrevealed cell.
fn next_cell<'a, I>(tokens: &mut I, mode: TokenMode) -> Result<Option<u32>, ReadError>
where
    I: Iterator<Item = &'a str>,
{
    for token in tokens.by_ref() {
        if token == "x" {
            return Ok(Some(0));
        }
        if let Ok(value) = token.parse::<u32>() {
            return Ok(Some(value));
        }
        if mode == TokenMode::Strict {
            return Err(ReadError::BadToken(token.to_string()));
        }
        // A skipped token that still looks numeric (e.g. a negative
        // number) shifts every later cell by one; flag it loudly.
        if token.parse::<i64>().is_ok() {
            warn!("skipping numeric token {token:?}, not a valid cell value");
        } else {
            trace!("skipping token {token:?}");
        }
    }
    Ok(None)
}
