//! # sudoku-solver
//!
//! A command-line solver for generalized N×N Sudoku puzzles, driven by
//! backtracking search with a minimum-remaining-values heuristic.
//!
//! ## Puzzle format
//!
//! A puzzle file is a stream of whitespace-separated tokens: first the
//! block dimension `size` (between 1 and 100, so a standard puzzle says
//! `3`), then `n * n` cell tokens in row-major order with `n = size²`.
//! A cell token is a base-10 integer in `1..=n` (`0` or the literal `x`
//! for an unknown cell); a value the grid cannot hold is an error. By
//! default any other token is skipped silently, so files may carry
//! decorative text; `--strict` rejects such tokens instead.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a puzzle file
//! sudoku-solver puzzle.txt
//!
//! # Read the puzzle from standard input
//! sudoku-solver < puzzle.txt
//!
//! # Print search statistics, suppress the puzzle echo
//! sudoku-solver --stats --quiet puzzle.txt
//!
//! # Generate shell completions
//! sudoku-solver completions bash
//! ```
//!
//! The solved grid is printed with block separators; an unsolvable puzzle
//! is reported as `UNSOLVABLE` rather than left silently half-filled.
//! Malformed input (size out of range, truncated grid) terminates with a
//! non-zero status.

use clap::{Args, CommandFactory, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;
use sudoku_solver::solver::board::Board;
use sudoku_solver::solver::reader::{ReadError, TokenMode, read_board};
use sudoku_solver::solver::search::{Outcome, SearchStats, Solver};
use tikv_jemalloc_ctl::{epoch, stats};

/// Global allocator using `tikv-jemallocator`, which also backs the
/// memory figures of the `--stats` report.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Defines the command-line interface for the Sudoku solver.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku-solver", version, about = "A generalized N×N Sudoku solver")]
struct Cli {
    /// Path to the puzzle file. Reads from standard input when omitted.
    #[arg(global = true)]
    path: Option<PathBuf>,

    /// Specifies the subcommand to execute.
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Common command-line options.
#[derive(Args, Debug, Default)]
struct CommonOptions {
    /// Reject tokens that are neither integers nor `x` instead of
    /// skipping them.
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Enable verification of the solved grid against the uniqueness
    /// constraints.
    #[arg(long, default_value_t = true)]
    verify: bool,

    /// Print search and memory statistics after solving.
    #[arg(short, long, default_value_t = false)]
    stats: bool,

    /// Do not echo the parsed puzzle before solving.
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return;
    }

    let mode = if cli.common.strict {
        TokenMode::Strict
    } else {
        TokenMode::Lenient
    };

    let time = std::time::Instant::now();
    let board = match read_input(cli.path.as_deref(), mode) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let parse_time = time.elapsed();

    if !cli.common.quiet {
        println!("{board}");
    }

    let time = std::time::Instant::now();
    let mut solver = Solver::new(board);
    let outcome = solver.solve();
    let elapsed = time.elapsed();

    match outcome {
        Outcome::Solved => {
            println!("{}", solver.board());
            if cli.common.verify {
                verify_solution(solver.board());
            }
            println!("SOLVED");
        }
        Outcome::Unsolvable => println!("UNSOLVABLE"),
    }

    if cli.common.stats {
        print_stats(parse_time, elapsed, solver.stats());
    }
}

/// Reads the puzzle from `path`, or from standard input when no path was
/// given.
fn read_input(path: Option<&Path>, mode: TokenMode) -> Result<Board, ReadError> {
    match path {
        Some(path) => {
            let file = File::open(path)?;
            read_board(BufReader::new(file), mode)
        }
        None => read_board(io::stdin().lock(), mode),
    }
}

/// Re-checks a solved board against the row/column/block uniqueness
/// constraints, independently of the tracker the search maintained.
///
/// A failure here is a solver defect, so it panics.
fn verify_solution(board: &Board) {
    let ok = board.is_valid_solution();
    println!("Verified: {ok:?}");
    assert!(ok, "solved board failed verification");
}

/// Helper function to print a single statistic line in a formatted table
/// row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate
/// (value/second).
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    #[allow(clippy::cast_precision_loss)]
    let rate = if elapsed > 0.0 { value as f64 / elapsed } else { 0.0 };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of search and memory statistics.
fn print_stats(parse_time: Duration, elapsed: Duration, s: &SearchStats) {
    let elapsed_secs = elapsed.as_secs_f64();

    // Advance the jemalloc epoch so the counters reflect the solve.
    epoch::advance().unwrap();
    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    #[allow(clippy::cast_precision_loss)]
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    #[allow(clippy::cast_precision_loss)]
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    println!("\n========================[ Search Statistics ]========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line_with_rate("Nodes", s.nodes, elapsed_secs);
    stat_line_with_rate("Placements", s.placements, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line("Memory usage (MiB)", format!("{allocated_mib:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident_mib:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}
