//! Search-tree nodes, arena storage, and heuristic evaluation.
//!
//! Nodes form a tree rooted at the initial state. Each node holds its
//! state, a handle to its parent, and the action that produced it; the
//! solution is read back by walking parent handles from the goal node.
//!
//! Nodes live in a [`NodeArena`] and refer to each other by [`NodeId`]
//! index, so parent links are plain handles rather than owning
//! back-pointers and the whole tree is dropped with the arena when the
//! search returns.

use crate::board::Board;
use crate::state::{Action, State};

/// Stable handle to a node in a [`NodeArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

/// A node in the search tree.
pub struct Node {
    /// The puzzle state at this node
    pub state: State,
    /// Parent node; `None` for the root
    pub parent: Option<NodeId>,
    /// Action that led from the parent to this state; `None` for the root
    pub action: Option<Action>,
}

impl Node {
    /// The root node wrapping the initial state.
    pub fn root(state: State) -> Self {
        Self {
            state,
            parent: None,
            action: None,
        }
    }
}

/// Flat storage for every node created during one search run.
#[derive(Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Number of nodes allocated so far; the search checks this against
    /// its node budget.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Expand a node by generating one child per legal action of its state.
///
/// Children are allocated in the arena with the expanded node as parent.
/// Returns their handles; the expanded node itself is not modified.
pub fn expand(arena: &mut NodeArena, id: NodeId) -> Vec<NodeId> {
    let actions = arena.get(id).state.actions();
    let mut children = Vec::with_capacity(actions.len());

    for action in actions {
        let child_state = arena.get(id).state.apply(action);
        children.push(arena.push(Node {
            state: child_state,
            parent: Some(id),
            action: Some(action),
        }));
    }

    children
}

/// Misplaced-cell (Hamming) count against the goal grid, blank included.
///
/// Zero exactly when the state is the goal, otherwise a positive count
/// bounded by the cell count. Deliberately consumed greedily by the
/// search, with no path-cost term: the solver finds *a* solution, not a
/// shortest one.
pub fn heuristic(state: &State, goal: &Board) -> u32 {
    state
        .board()
        .cells()
        .iter()
        .zip(goal.cells())
        .filter(|(tile, goal_tile)| tile != goal_tile)
        .count() as u32
}

/// Read the action sequence back from a goal node.
///
/// Walks parent handles up to the root collecting each node's action,
/// then reverses so the sequence reads root-to-goal. The root's empty
/// action slot drops out of the walk.
pub fn extract_solution(arena: &NodeArena, goal_id: NodeId) -> Vec<Action> {
    let mut actions = Vec::new();
    let mut current = Some(goal_id);

    while let Some(id) = current {
        let node = arena.get(id);
        if let Some(action) = node.action {
            actions.push(action);
        }
        current = node.parent;
    }

    actions.reverse();
    actions
}
