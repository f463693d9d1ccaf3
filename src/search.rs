//! Greedy best-first search over puzzle configurations.
//!
//! The search keeps a priority frontier of unexpanded nodes ordered by
//! ascending heuristic value, and a set of every state ever enqueued.
//! Each round it pops the most promising node, tests it against the goal
//! grid, and otherwise expands it; children whose state has been enqueued
//! before are discarded, even when the new path is shorter. The first
//! enqueuing of a state wins.
//!
//! Ties in heuristic value break FIFO: every push is stamped with a
//! monotonically increasing sequence number, so equal-valued nodes pop in
//! insertion order. This pins down which of several equally good
//! solutions is found, not whether one is found.
//!
//! There is no catchable allocation failure to lean on, so runaway
//! frontier growth is bounded by an explicit node budget instead: once
//! the arena reaches the limit the run terminates with
//! [`Status::OutOfMemory`] and no partial solution.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::fmt;

use crate::board::Board;
use crate::constants::DEFAULT_NODE_LIMIT;
use crate::node::{Node, NodeArena, NodeId, expand, extract_solution, heuristic};
use crate::state::{Action, State};

/// Disposition of a search run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// No run has completed on this instance yet
    Unsolved,
    /// A goal state was reached; the action list is available
    Solved,
    /// The reachable state space was exhausted without finding a goal
    Unsolvable,
    /// The node budget was exceeded before a goal was found
    OutOfMemory,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Unsolved => "unsolved",
            Status::Solved => "solved",
            Status::Unsolvable => "unsolvable",
            Status::OutOfMemory => "out of memory",
        };
        write!(f, "{s}")
    }
}

/// Frontier entry: heuristic value, push sequence number, node handle.
///
/// `BinaryHeap` is a max-heap, so the ordering is reversed to pop the
/// smallest heuristic value first; among equal values the earliest push
/// wins (FIFO tie-break).
struct FrontierEntry {
    h: u32,
    seq: u64,
    id: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.h == other.h && self.seq == other.seq
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .h
            .cmp(&self.h)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A greedy best-first solver instance.
///
/// After a [`Search::search`] call the instance exposes the terminal
/// [`Status`], the number of expanded nodes, and the retained action
/// list. Calling `search` again resets all three and runs fresh.
pub struct Search {
    /// Node budget; the run aborts with [`Status::OutOfMemory`] once the
    /// arena reaches this size
    node_limit: usize,
    /// Disposition of the most recent run
    status: Status,
    /// Nodes popped from the frontier and expanded. The goal node is
    /// tested but never expanded, so it does not count.
    expanded_nodes: usize,
    /// Action list of the most recent solved run
    result: Option<Vec<Action>>,
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

impl Search {
    /// A solver with the default node budget.
    pub fn new() -> Self {
        Self::with_node_limit(DEFAULT_NODE_LIMIT)
    }

    /// A solver that gives up with [`Status::OutOfMemory`] once
    /// `node_limit` nodes have been allocated.
    pub fn with_node_limit(node_limit: usize) -> Self {
        Self {
            node_limit,
            status: Status::Unsolved,
            expanded_nodes: 0,
            result: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Nodes expanded by the most recent run.
    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    /// Action list of the most recent run, if it solved.
    pub fn result(&self) -> Option<&[Action]> {
        self.result.as_deref()
    }

    /// Search for a move sequence transforming `initial` into the goal
    /// configuration of the same dimensions.
    ///
    /// Returns the root-to-goal action list on success, `None` otherwise;
    /// [`Search::status`] tells `Unsolvable` and `OutOfMemory` apart. The
    /// list is also retained on the instance, see [`Search::result`].
    pub fn search(&mut self, initial: Board) -> Option<Vec<Action>> {
        self.status = Status::Unsolved;
        self.expanded_nodes = 0;
        self.result = None;

        // The goal grid is derived once from the input shape and shared
        // read-only for the whole run.
        let goal = Board::goal(initial.rows(), initial.cols());

        let mut arena = NodeArena::new();
        let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut enqueued: HashSet<State> = HashSet::new();
        let mut seq: u64 = 0;

        let root_state = State::new(initial);
        let root_h = heuristic(&root_state, &goal);
        enqueued.insert(root_state.clone());
        let root = arena.push(Node::root(root_state));
        frontier.push(FrontierEntry {
            h: root_h,
            seq,
            id: root,
        });
        seq += 1;

        while let Some(entry) = frontier.pop() {
            if arena.get(entry.id).state.is_goal(&goal) {
                self.result = Some(extract_solution(&arena, entry.id));
                self.status = Status::Solved;
                return self.result.clone();
            }

            if arena.len() >= self.node_limit {
                self.status = Status::OutOfMemory;
                return None;
            }

            self.expanded_nodes += 1;
            for child_id in expand(&mut arena, entry.id) {
                let child_state = &arena.get(child_id).state;
                if enqueued.contains(child_state) {
                    // First enqueuing of a state wins; rediscoveries are
                    // dropped even when the new path is shorter.
                    continue;
                }
                let h = heuristic(child_state, &goal);
                enqueued.insert(child_state.clone());
                frontier.push(FrontierEntry {
                    h,
                    seq,
                    id: child_id,
                });
                seq += 1;
            }
        }

        self.status = Status::Unsolvable;
        None
    }
}
