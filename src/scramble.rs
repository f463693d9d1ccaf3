//! Random solvable instances and the parity solvability test.
//!
//! Not every tile permutation can reach the goal: configurations split
//! into two parity classes, and only the goal's own class is solvable.
//! The search discovers membership in the wrong class the hard way, by
//! exhausting the reachable states; the test here decides it upfront in
//! O(n²), which the generator uses to reject the unsolvable half of the
//! uniform shuffle.

use crate::board::{Board, Tile};

/// Permutation-parity solvability test against the canonical goal of the
/// board's dimensions.
///
/// With an odd number of columns the configuration is solvable iff its
/// inversion count is even. With an even number it is solvable iff the
/// inversion count plus the blank's row index counted from the bottom
/// (1-based) is odd.
pub fn is_solvable(board: &Board) -> bool {
    let inversions = count_inversions(board.cells());
    if board.cols() % 2 == 1 {
        inversions % 2 == 0
    } else {
        let (blank_row, _) = board.blank_position();
        let from_bottom = board.rows() - blank_row;
        (inversions + from_bottom) % 2 == 1
    }
}

/// Pairs of tiles appearing in the wrong relative order, blank excluded.
fn count_inversions(cells: &[Tile]) -> usize {
    cells
        .iter()
        .enumerate()
        .filter(|(_, tile)| !tile.is_blank())
        .map(|(i, tile)| {
            cells[i + 1..]
                .iter()
                .filter(|later| !later.is_blank() && *later < tile)
                .count()
        })
        .sum()
}

/// Uniformly shuffled solvable R×C board.
///
/// Fisher-Yates shuffles the goal cells and re-shuffles until the parity
/// test passes; roughly half of all permutations survive, so the loop
/// terminates after a couple of draws in expectation.
pub fn scramble(rows: usize, cols: usize, rng: &mut fastrand::Rng) -> Board {
    let mut cells: Vec<Tile> = Board::goal(rows, cols).cells().to_vec();

    loop {
        for i in (1..cells.len()).rev() {
            let j = rng.usize(..=i);
            cells.swap(i, j);
        }
        let board = Board::from_parts(rows, cols, cells.clone());
        if is_solvable(&board) {
            return board;
        }
    }
}
