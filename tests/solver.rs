//! End-to-end scenarios: read a puzzle, solve it, check the result.

use std::fs;
use sudoku_solver::solver::board::Board;
use sudoku_solver::solver::reader::{ReadError, TokenMode, parse_board};
use sudoku_solver::solver::search::{Outcome, Solver};

fn read_fixture(name: &str) -> Board {
    let path = format!("tests/fixtures/{name}");
    let text = fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
    parse_board(&text, TokenMode::Lenient).unwrap_or_else(|e| panic!("failed to parse {path}: {e}"))
}

fn solve(board: Board) -> Board {
    let mut solver = Solver::new(board);
    assert_eq!(solver.solve(), Outcome::Solved);
    solver.into_board()
}

#[test]
fn single_cell_puzzle() {
    let board = parse_board("1 x", TokenMode::Lenient).unwrap();
    let solved = solve(board);
    assert_eq!(solved.value(0, 0), 1);
    assert!(solved.is_valid_solution());
}

#[test]
fn four_by_four_fixture_has_the_expected_solution() {
    let solved = solve(read_fixture("size2.txt"));
    #[rustfmt::skip]
    let expected = Board::from_cells(2, vec![
        1, 2, 3, 4,
        3, 4, 1, 2,
        2, 1, 4, 3,
        4, 3, 2, 1,
    ]);
    assert_eq!(solved, expected);
}

#[test]
fn easy_nine_by_nine_fixture_has_the_expected_solution() {
    let solved = solve(read_fixture("easy9.txt"));
    #[rustfmt::skip]
    let expected = Board::from_cells(3, vec![
        5, 3, 4, 6, 7, 8, 9, 1, 2,
        6, 7, 2, 1, 9, 5, 3, 4, 8,
        1, 9, 8, 3, 4, 2, 5, 6, 7,
        8, 5, 9, 7, 6, 1, 4, 2, 3,
        4, 2, 6, 8, 5, 3, 7, 9, 1,
        7, 1, 3, 9, 2, 4, 8, 5, 6,
        9, 6, 1, 5, 3, 7, 2, 8, 4,
        2, 8, 7, 4, 1, 9, 6, 3, 5,
        3, 4, 5, 2, 8, 6, 1, 7, 9,
    ]);
    assert_eq!(solved, expected);
    assert!(solved.is_valid_solution());
}

#[test]
fn hard_nine_by_nine_fixture_solves_to_a_valid_grid() {
    let puzzle = read_fixture("hard9.txt");
    let solved = solve(puzzle.clone());

    assert!(solved.is_valid_solution());
    for row in 0..9 {
        for col in 0..9 {
            if !puzzle.is_empty_cell(row, col) {
                assert_eq!(solved.value(row, col), puzzle.value(row, col));
            }
        }
    }
}

#[test]
fn complete_grid_round_trips_untouched() {
    let text = "2  1 2 3 4  3 4 1 2  2 1 4 3  4 3 2 1";
    let board = parse_board(text, TokenMode::Lenient).unwrap();
    let before = board.clone();

    let mut solver = Solver::new(board);
    assert_eq!(solver.solve(), Outcome::Solved);
    assert_eq!(solver.stats().placements, 0);
    assert_eq!(solver.into_board(), before);
}

#[test]
fn stuck_puzzle_reports_unsolvable_with_givens_intact() {
    // (0, 0) is empty but its row, column and block together already cover
    // every value in 1..=9.
    let text = "3\n\
        x x x x 1 2 3 4 5\n\
        x 8 x x x x x x x\n\
        x x 9 x x x x x x\n\
        x x x x x x x x x\n\
        6 x x x x x x x x\n\
        7 x x x x x x x x\n\
        x x x x x x x x x\n\
        x x x x x x x x x\n\
        x x x x x x x x x\n";
    let board = parse_board(text, TokenMode::Lenient).unwrap();
    let before = board.clone();

    let mut solver = Solver::new(board);
    assert_eq!(solver.solve(), Outcome::Unsolvable);
    assert_eq!(solver.into_board(), before);
}

#[test]
fn duplicate_givens_report_unsolvable() {
    // Two 1s in the top row of an otherwise complete grid.
    let text = "2  1 1 3 4  3 4 1 2  2 3 4 1  4 2 2 3";
    let board = parse_board(text, TokenMode::Lenient).unwrap();
    let mut solver = Solver::new(board);
    assert_eq!(solver.solve(), Outcome::Unsolvable);
}

#[test]
fn malformed_input_never_reaches_the_solver() {
    assert!(matches!(
        parse_board("0 1 2 3", TokenMode::Lenient),
        Err(ReadError::SizeOutOfRange(0))
    ));
    assert!(matches!(
        parse_board("3 1 2 3", TokenMode::Lenient),
        Err(ReadError::TruncatedGrid { expected: 81, found: 3 })
    ));
}

#[test]
fn out_of_range_given_is_stopped_at_the_boundary() {
    // A 9 on a 4x4 grid duplicates nothing, so it would slip past the
    // seed consistency check and let the search "complete" a board that
    // can never satisfy the solved-grid property. The reader must refuse
    // it before the engine ever sees it.
    let text = "2  9 x x x  x x x x  x x x x  x x x x";
    assert!(matches!(
        parse_board(text, TokenMode::Lenient),
        Err(ReadError::ValueOutOfRange { value: 9, max: 4 })
    ));
    assert!(matches!(
        parse_board(text, TokenMode::Strict),
        Err(ReadError::ValueOutOfRange { value: 9, max: 4 })
    ));
}

#[test]
fn solved_grid_renders_with_block_separators() {
    let solved = solve(read_fixture("size2.txt"));
    let expected = "1 2 | 3 4 \n\
                    3 4 | 1 2 \n\
                    ---------\n\
                    2 1 | 4 3 \n\
                    4 3 | 2 1 \n";
    assert_eq!(solved.to_string(), expected);
}
