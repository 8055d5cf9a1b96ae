#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Text emission: the human-readable grid rendering.
//!
//! Cells are right-aligned to the decimal width of `n`, separated by a
//! single space, with a `" |"` marker after every `size`-th column and a
//! dashed rule after every `size`-th row (the trailing block boundary is
//! omitted in both directions).

use crate::solver::board::Board;
use std::fmt;

/// Decimal digits needed to print `n`, i.e. `floor(log10(n)) + 1`.
const fn decimal_width(mut n: usize) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.n();
        let size = self.size();
        let digits = decimal_width(n);
        let rule = "-".repeat((digits + 1) * n + 2 * size - 3);

        for row in 0..n {
            for col in 0..n {
                write!(f, "{:>width$}", self.value(row, col), width = digits)?;
                if col + 1 < n && (col + 1) % size == 0 {
                    write!(f, " |")?;
                }
                write!(f, " ")?;
            }
            writeln!(f)?;
            if row + 1 < n && (row + 1) % size == 0 {
                writeln!(f, "{rule}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn width_tracks_the_grid_dimension() {
        assert_eq!(decimal_width(1), 1);
        assert_eq!(decimal_width(9), 1);
        assert_eq!(decimal_width(16), 2);
        assert_eq!(decimal_width(100), 3);
        assert_eq!(decimal_width(10000), 5);
    }

    #[test]
    fn renders_a_four_by_four_grid() {
        #[rustfmt::skip]
        let board = Board::from_cells(2, vec![
            1, 2, 3, 4,
            3, 4, 1, 2,
            2, 1, 4, 3,
            4, 3, 2, 1,
        ]);

        let expected = "1 2 | 3 4 \n\
                        3 4 | 1 2 \n\
                        ---------\n\
                        2 1 | 4 3 \n\
                        4 3 | 2 1 \n";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn renders_empty_markers_as_zeros() {
        let mut board = Board::new(2);
        board.set(0, 0, 1);
        let first_line = board.to_string().lines().next().unwrap().to_string();
        assert_eq!(first_line, "1 0 | 0 0 ");
    }

    #[test]
    fn one_by_one_grid_has_no_separators() {
        let board = Board::from_cells(1, vec![1]);
        assert_eq!(board.to_string(), "1 \n");
    }

    #[test]
    fn rule_length_matches_the_rendered_rows() {
        // For every row line, the dashed rule is exactly as long as the
        // line minus its trailing space.
        let board = Board::new(4);
        let rendered = board.to_string();
        let (rules, rows): (Vec<&str>, Vec<&str>) = rendered
            .lines()
            .partition(|line| line.starts_with('-'));

        assert_eq!(rules.len(), 3);
        assert_eq!(rows.len(), 16);
        let rule_len = rules.iter().map(|rule| rule.len()).all_equal_value().unwrap();
        assert!(rows.iter().all(|row| row.len() == rule_len + 1));
    }
}
