//! Puzzle states, legal moves, and transitions.
//!
//! A [`State`] wraps one immutable [`Board`] and provides:
//! - the goal test against a shared goal grid
//! - enumeration of legal moves (one per in-bounds neighbor of the blank)
//! - the transition function, producing a successor state by full copy
//!
//! Directions name the move of the sliding tile, not of the blank: the
//! tile *below* the blank slides [`Direction::Up`] into it, the tile to
//! the *left* slides [`Direction::Right`], and so on.

use std::fmt;

use crate::board::{Board, Tile};

/// Direction a tile slides into the blank slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The move that undoes this one.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        write!(f, "{s}")
    }
}

/// One legal move: which tile slides, and in which direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    tile: Tile,
    direction: Direction,
}

impl Action {
    pub fn new(tile: Tile, direction: Direction) -> Self {
        Self { tile, direction }
    }

    #[inline]
    pub fn tile(&self) -> Tile {
        self.tile
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tile, self.direction)
    }
}

/// One configuration of the puzzle. Immutable; equality and hashing are
/// the board's structural equality and hashing, which is the basis for
/// duplicate-state detection in the search.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State {
    board: Board,
}

impl State {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True iff every cell matches the goal grid.
    pub fn is_goal(&self, goal: &Board) -> bool {
        self.board == *goal
    }

    /// Legal moves from this state: one action per in-bounds grid neighbor
    /// of the blank, in the fixed order below/above/right/left. 1-4
    /// actions; never empty for any board larger than a single cell.
    pub fn actions(&self) -> Vec<Action> {
        let (row, col) = self.board.blank_position();
        let mut actions = Vec::with_capacity(4);

        if let Some(tile) = self.board.get(row + 1, col) {
            actions.push(Action::new(tile, Direction::Up));
        }
        if let Some(tile) = row.checked_sub(1).and_then(|r| self.board.get(r, col)) {
            actions.push(Action::new(tile, Direction::Down));
        }
        if let Some(tile) = self.board.get(row, col + 1) {
            actions.push(Action::new(tile, Direction::Left));
        }
        if let Some(tile) = col.checked_sub(1).and_then(|c| self.board.get(row, c)) {
            actions.push(Action::new(tile, Direction::Right));
        }

        actions
    }

    /// Successor state after sliding `action`'s tile into the blank.
    ///
    /// The grid is fully copied; the receiver is never mutated (retained
    /// states back the duplicate-detection set and the solution path).
    /// `action` must be legal for this state, i.e. come from
    /// [`State::actions`].
    pub fn apply(&self, action: Action) -> State {
        let (row, col) = self.board.blank_position();
        let (src_row, src_col) = match action.direction() {
            Direction::Up => (row + 1, col),
            Direction::Down => (row - 1, col),
            Direction::Left => (row, col + 1),
            Direction::Right => (row, col - 1),
        };

        let cols = self.board.cols();
        let mut cells = self.board.cells().to_vec();
        debug_assert_eq!(cells[src_row * cols + src_col], action.tile());
        cells.swap(row * cols + col, src_row * cols + src_col);

        State::new(Board::from_parts(self.board.rows(), cols, cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(notation: &str) -> State {
        State::new(notation.parse().unwrap())
    }

    #[test]
    fn test_is_goal() {
        let goal = Board::goal(3, 3);
        assert!(state("1 2 3|4 5 6|7 8 _").is_goal(&goal));
        assert!(!state("1 2 3|4 5 6|7 _ 8").is_goal(&goal));
    }

    #[test]
    fn test_action_count_corner_edge_center() {
        // Blank in a corner: 2 moves
        assert_eq!(state("_ 1 2|3 4 5|6 7 8").actions().len(), 2);
        // Blank on a non-corner edge: 3 moves
        assert_eq!(state("1 _ 2|3 4 5|6 7 8").actions().len(), 3);
        // Blank in the center: 4 moves
        assert_eq!(state("1 2 3|4 _ 5|6 7 8").actions().len(), 4);
    }

    #[test]
    fn test_single_row_actions_are_horizontal() {
        let end = state("_ 2 1");
        let end_actions = end.actions();
        assert_eq!(end_actions.len(), 1);
        assert_eq!(end_actions[0].direction(), Direction::Left);

        let interior = state("2 _ 1");
        let interior_actions = interior.actions();
        assert_eq!(interior_actions.len(), 2);
        for action in interior_actions {
            assert!(matches!(
                action.direction(),
                Direction::Left | Direction::Right
            ));
        }
    }

    #[test]
    fn test_single_column_actions_are_vertical() {
        let interior = state("2|_|1");
        let actions = interior.actions();
        assert_eq!(actions.len(), 2);
        for action in actions {
            assert!(matches!(action.direction(), Direction::Up | Direction::Down));
        }
    }

    #[test]
    fn test_apply_slides_tile_into_blank() {
        let s = state("1 2 3|4 _ 5|7 8 6");
        let next = s.apply(Action::new(Tile::new(5), Direction::Left));
        assert_eq!(next.board().notation(), "1 2 3|4 5 _|7 8 6");
        // The source state is untouched.
        assert_eq!(s.board().notation(), "1 2 3|4 _ 5|7 8 6");
    }

    #[test]
    fn test_apply_roundtrip_restores_state() {
        let s = state("1 2 3|4 _ 5|7 8 6");
        for action in s.actions() {
            let there = s.apply(action);
            let back = there.apply(Action::new(action.tile(), action.direction().opposite()));
            assert_eq!(s, back, "round-trip failed for {action}");
        }
    }

    #[test]
    fn test_actions_move_each_neighbor() {
        let s = state("1 2 3|4 _ 5|7 8 6");
        let mut tiles: Vec<u32> = s.actions().iter().map(|a| a.tile().value()).collect();
        tiles.sort_unstable();
        // The four grid neighbors of the blank, each exactly once.
        assert_eq!(tiles, vec![2, 4, 5, 8]);
    }
}
