use crate::{
    constants::{Weight, INFINITY},
    graph::NodeIndex,
};

/// Outcome of a single shortest path query.
///
/// An unreachable target is reported with a weight of [`INFINITY`] and an
/// empty path; check [`ShortestPath::is_reachable`] instead of the path
/// length.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ShortestPath {
    nodes: Vec<NodeIndex>,
    weight: Weight,
    steps: usize,
    nodes_visited: usize,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, weight: Weight, steps: usize, nodes_visited: usize) -> Self {
        ShortestPath {
            nodes,
            weight,
            steps,
            nodes_visited,
        }
    }

    /// Node ids from source to target
    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    /// Total length of the path
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Number of edges inspected during the search
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of nodes finalized during the search
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    pub fn is_reachable(&self) -> bool {
        self.weight != INFINITY
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
