//! Npuzzle-Rust: a greedy best-first sliding-tile puzzle solver.
//!
//! ## Usage
//!
//! - `npuzzle-rust` - Scramble and solve a 3x3 demo board
//! - `npuzzle-rust solve "1 2 3|4 _ 5|7 8 6"` - Solve a board in text notation
//! - `npuzzle-rust scramble --rows 4 --cols 4` - Print a random solvable board

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use npuzzle_rust::board::Board;
use npuzzle_rust::constants::DEFAULT_NODE_LIMIT;
use npuzzle_rust::scramble::{is_solvable, scramble};
use npuzzle_rust::search::Search;

/// Npuzzle-Rust: a greedy best-first sliding-tile puzzle solver
#[derive(Parser)]
#[command(name = "npuzzle-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board given in text notation (`|` between rows, `_` for the blank)
    Solve {
        /// Board to solve, e.g. "1 2 3|4 _ 5|7 8 6"
        board: String,
        /// Node budget before the search gives up
        #[arg(long, default_value_t = DEFAULT_NODE_LIMIT)]
        max_nodes: usize,
    },
    /// Print a random solvable board
    Scramble {
        #[arg(long, default_value_t = 3)]
        rows: usize,
        #[arg(long, default_value_t = 3)]
        cols: usize,
        /// RNG seed for reproducible scrambles
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Scramble a 3x3 board and solve it
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Solve { board, max_nodes }) => {
            let board: Board = board.parse().context("invalid board")?;
            solve(board, max_nodes)
        }
        Some(Commands::Scramble { rows, cols, seed }) => {
            if rows == 0 || cols == 0 {
                bail!("board dimensions must be at least 1x1");
            }
            let mut rng = match seed {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };
            println!("{}", scramble(rows, cols, &mut rng).notation());
            Ok(())
        }
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn solve(board: Board, max_nodes: usize) -> Result<()> {
    if !is_solvable(&board) {
        eprintln!("note: board is in the unsolvable parity class");
    }

    let mut search = Search::with_node_limit(max_nodes);
    match search.search(board) {
        Some(plan) => {
            for action in &plan {
                println!("{action}");
            }
            eprintln!(
                "solved in {} moves, {} nodes expanded",
                plan.len(),
                search.expanded_nodes()
            );
            Ok(())
        }
        None => bail!(
            "no solution: {} after {} nodes expanded",
            search.status(),
            search.expanded_nodes()
        ),
    }
}

fn run_demo() -> Result<()> {
    println!("Npuzzle-Rust: greedy best-first sliding-tile solver\n");

    let mut rng = fastrand::Rng::new();
    let board = scramble(3, 3, &mut rng);
    println!("Scrambled board:\n{board}");

    let mut search = Search::new();
    match search.search(board) {
        Some(plan) => {
            println!(
                "Solution ({} moves, {} nodes expanded):",
                plan.len(),
                search.expanded_nodes()
            );
            for action in &plan {
                println!("  {action}");
            }
        }
        None => println!("Search ended: {}", search.status()),
    }
    Ok(())
}
