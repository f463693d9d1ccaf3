//! Constants for board markers and search parameters.
//!
//! Board dimensions are runtime data (any R×C with R·C ≥ 1), so unlike a
//! fixed-size game engine there is no compile-time geometry here; only the
//! markers of the text notation and the resource ceiling of the search.

// =============================================================================
// Board Markers
// =============================================================================

/// Tile value reserved for the blank (empty) slot.
pub const BLANK_VALUE: u32 = 0;

/// Token representing the blank slot in the text notation.
pub const BLANK_TOKEN: &str = "_";

/// Separator between rows in the text notation.
pub const ROW_SEPARATOR: char = '|';

// =============================================================================
// Search Parameters
// =============================================================================

/// Default ceiling on the number of nodes a search may allocate.
///
/// The frontier and the retained node tree grow without bound on hard or
/// unsolvable inputs; once this many nodes exist the search terminates
/// with an out-of-memory status instead of exhausting the process heap.
pub const DEFAULT_NODE_LIMIT: usize = 1_000_000;
