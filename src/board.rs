//! Board configurations and the text notation.
//!
//! A board is an immutable rectangular grid of tiles stored row-major in a
//! flat vector. Equality and hashing are structural (dimensions plus cell
//! contents), which is what makes duplicate-state detection in the search
//! independent of object identity.
//!
//! The text notation separates rows with `|`, cells with spaces, and marks
//! the blank with `_`: `"1 2 3|4 _ 5|7 8 6"`.

use std::fmt;
use std::str::FromStr;

use crate::constants::{BLANK_TOKEN, BLANK_VALUE, ROW_SEPARATOR};

/// A single labeled tile. The value `0` denotes the blank slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(u32);

impl Tile {
    pub fn new(value: u32) -> Self {
        Tile(value)
    }

    /// The blank (empty) slot.
    pub fn blank() -> Self {
        Tile(BLANK_VALUE)
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.0 == BLANK_VALUE
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            write!(f, "{BLANK_TOKEN}")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// One puzzle configuration: an R×C grid of tiles.
///
/// Invariant: an R×C board holds exactly the values `{0, 1, .., R*C-1}`,
/// each once. The parser enforces this; boards built internally (goal
/// grids, transitions, scrambles) preserve it by construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Tile>,
}

impl Board {
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<Tile>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// The canonical solved configuration for an R×C grid: cell `(i, j)`
    /// holds `i*C + j + 1`, except the last cell which holds the blank.
    ///
    /// The goal grid is a property of the dimensions, not of any
    /// particular board; the search derives it once from the input shape.
    pub fn goal(rows: usize, cols: usize) -> Self {
        let mut cells: Vec<Tile> = (1..=(rows * cols) as u32).map(Tile::new).collect();
        cells[rows * cols - 1] = Tile::blank();
        Self { rows, cols, cells }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Tile at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[self.idx(row, col)])
    }

    /// Row-major view of the grid.
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Position of the blank slot, scanning row-major for the first match.
    pub fn blank_position(&self) -> (usize, usize) {
        let at = self
            .cells
            .iter()
            .position(Tile::is_blank)
            .unwrap_or_default();
        (at / self.cols, at % self.cols)
    }

    /// Single-line `|`-separated notation, parseable by [`FromStr`].
    pub fn notation(&self) -> String {
        self.cells
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .map(Tile::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(&ROW_SEPARATOR.to_string())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for (col, tile) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{tile}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Reasons a board string is rejected before it reaches the solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No rows or no cells
    EmptyBoard,
    /// A row with a different cell count than the first row
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell that is neither the blank token nor a non-negative integer
    BadToken(String),
    /// A tile value appearing more than once
    DuplicateValue(u32),
    /// A tile value outside `0..rows*cols`
    ValueOutOfRange { value: u32, rows: usize, cols: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyBoard => write!(f, "board string is empty"),
            ParseError::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            ParseError::BadToken(token) => write!(f, "unrecognized cell token \"{token}\""),
            ParseError::DuplicateValue(value) => write!(f, "duplicate tile value {value}"),
            ParseError::ValueOutOfRange { value, rows, cols } => {
                write!(f, "tile value {value} out of range for a {rows}x{cols} board")
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl FromStr for Board {
    type Err = ParseError;

    /// Parse the `|`-separated notation and validate the board invariant:
    /// every value in `0..rows*cols` present exactly once (so exactly one
    /// blank, no duplicates, no gaps).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows_text: Vec<&str> = s
            .trim()
            .split(ROW_SEPARATOR)
            .filter(|row| !row.trim().is_empty())
            .collect();
        if rows_text.is_empty() {
            return Err(ParseError::EmptyBoard);
        }

        let rows = rows_text.len();
        let cols = rows_text[0].split_whitespace().count();
        let mut cells = Vec::with_capacity(rows * cols);

        for (i, row_text) in rows_text.iter().enumerate() {
            let tokens: Vec<&str> = row_text.split_whitespace().collect();
            if tokens.len() != cols {
                return Err(ParseError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: tokens.len(),
                });
            }
            for token in tokens {
                if token == BLANK_TOKEN {
                    cells.push(Tile::blank());
                } else {
                    let value: u32 = token
                        .parse()
                        .map_err(|_| ParseError::BadToken(token.to_string()))?;
                    cells.push(Tile::new(value));
                }
            }
        }

        // Pigeonhole: rows*cols distinct values below rows*cols is exactly
        // the full set, blank included.
        let mut seen = vec![false; rows * cols];
        for tile in &cells {
            let value = tile.value();
            if value as usize >= rows * cols {
                return Err(ParseError::ValueOutOfRange { value, rows, cols });
            }
            if seen[value as usize] {
                return Err(ParseError::DuplicateValue(value));
            }
            seen[value as usize] = true;
        }

        Ok(Board::from_parts(rows, cols, cells))
    }
}
