//! Npuzzle-Rust: a greedy best-first sliding-tile puzzle solver.
//!
//! This crate solves generalized R×C sliding-tile puzzles ("8-puzzle",
//! "15-puzzle") by best-first search over the configuration graph,
//! ordered by a misplaced-tiles heuristic.
//!
//! ## Modules
//!
//! - [`constants`] - Board markers and search parameters
//! - [`board`] - Tiles, board configurations, goal grids, text notation
//! - [`state`] - Goal testing, legal moves, transitions
//! - [`node`] - Arena-allocated search tree and heuristic evaluation
//! - [`search`] - Greedy best-first search orchestration
//! - [`scramble`] - Solvable-instance generation and the parity test
//!
//! ## Example
//!
//! ```
//! use npuzzle_rust::board::Board;
//! use npuzzle_rust::search::{Search, Status};
//!
//! // Two moves from solved: slide 5 left, then 6 up.
//! let board: Board = "1 2 3|4 _ 5|7 8 6".parse().unwrap();
//!
//! let mut search = Search::new();
//! let plan = search.search(board).expect("fixture is solvable");
//!
//! assert_eq!(search.status(), Status::Solved);
//! assert!(!plan.is_empty());
//! ```

pub mod board;
pub mod constants;
pub mod node;
pub mod scramble;
pub mod search;
pub mod state;
