//! Per-direction scratch space of a Dijkstra search.
use std::{cmp::Reverse, hash::BuildHasherDefault};

use priority_queue::PriorityQueue;
use rustc_hash::FxHasher;

use crate::{
    constants::{Weight, INFINITY},
    graph::NodeIndex,
};

type Queue = PriorityQueue<NodeIndex, Reverse<Weight>, BuildHasherDefault<FxHasher>>;

/// Tentative distances, predecessors and the frontier of one search
/// direction, rooted at `root`.
///
/// Every node is queued on creation. A node leaves the frontier when it is
/// popped; from then on its distance and predecessor are final.
pub struct SearchState {
    root: NodeIndex,
    distances: Vec<Weight>,
    predecessors: Vec<Option<NodeIndex>>,
    in_frontier: Vec<bool>,
    queue: Queue,
}

impl SearchState {
    /// `root` must be a valid index for a graph with `num_nodes` nodes
    pub fn new(num_nodes: usize, root: NodeIndex) -> Self {
        let mut distances = vec![INFINITY; num_nodes];
        distances[root.index()] = 0;

        let mut queue = Queue::with_capacity_and_default_hasher(num_nodes);
        for (idx, distance) in distances.iter().enumerate() {
            queue.push(NodeIndex::new(idx), Reverse(*distance));
        }

        SearchState {
            root,
            distances,
            predecessors: vec![None; num_nodes],
            in_frontier: vec![true; num_nodes],
            queue,
        }
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn distance(&self, node: NodeIndex) -> Weight {
        self.distances[node.index()]
    }

    pub fn predecessor(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.predecessors[node.index()]
    }

    pub fn in_frontier(&self, node: NodeIndex) -> bool {
        self.in_frontier[node.index()]
    }

    /// Node has been popped, its distance is final
    pub fn is_settled(&self, node: NodeIndex) -> bool {
        !self.in_frontier(node)
    }

    pub fn is_queue_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Removes the node with the smallest tentative distance from the queue
    /// and the frontier.
    pub fn pop(&mut self) -> Option<NodeIndex> {
        let (node, _) = self.queue.pop()?;
        self.in_frontier[node.index()] = false;
        Some(node)
    }

    /// Relaxes the edge `node -> neighbor`. Settled neighbors are left
    /// untouched.
    ///
    /// Returns `true` if the tentative distance of `neighbor` improved.
    pub fn relax(&mut self, node: NodeIndex, neighbor: NodeIndex, weight: Weight) -> bool {
        if !self.in_frontier(neighbor) {
            return false;
        }

        let new_distance = self.distance(node).saturating_add(weight);
        if new_distance >= self.distance(neighbor) {
            return false;
        }

        self.distances[neighbor.index()] = new_distance;
        self.predecessors[neighbor.index()] = Some(node);
        // Decrease key, the node is still queued as it is in the frontier
        self.queue.change_priority(&neighbor, Reverse(new_distance));

        true
    }

    /// Follows the predecessors from `node` back to the root.
    ///
    /// The returned path starts at the root and ends at `node`. If `node` has
    /// not been reached, the chain ends early and the path does not start at
    /// the root.
    pub fn path_to(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut path = vec![node];
        let mut current = node;

        while let Some(prev_node) = self.predecessor(current) {
            path.push(prev_node);
            current = prev_node;
        }

        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node_index;

    #[test]
    fn root_is_popped_first() {
        let mut state = SearchState::new(4, node_index(2));

        assert_eq!(state.root(), node_index(2));
        assert_eq!(state.distance(node_index(2)), 0);
        assert_eq!(state.distance(node_index(0)), INFINITY);
        assert!(state.in_frontier(node_index(2)));

        assert_eq!(state.pop(), Some(node_index(2)));
        assert!(state.is_settled(node_index(2)));
        assert!(!state.is_settled(node_index(0)));
    }

    #[test]
    fn relax_decreases_key() {
        let mut state = SearchState::new(4, node_index(0));
        let root = state.pop().unwrap();

        assert!(state.relax(root, node_index(1), 10));
        assert!(state.relax(root, node_index(2), 3));
        // Not an improvement
        assert!(!state.relax(root, node_index(1), 12));

        assert_eq!(state.pop(), Some(node_index(2)));
        assert!(state.relax(node_index(2), node_index(1), 4));
        assert_eq!(state.distance(node_index(1)), 7);
        assert_eq!(state.predecessor(node_index(1)), Some(node_index(2)));

        assert_eq!(state.pop(), Some(node_index(1)));
        assert_eq!(
            state.path_to(node_index(1)),
            vec![node_index(0), node_index(2), node_index(1)]
        );

        // Unreached node is popped last with an infinite distance
        assert_eq!(state.pop(), Some(node_index(3)));
        assert_eq!(state.distance(node_index(3)), INFINITY);
        assert!(state.is_queue_empty());
        assert_eq!(state.pop(), None);
    }

    #[test]
    fn settled_nodes_are_final() {
        let mut state = SearchState::new(2, node_index(0));
        let root = state.pop().unwrap();
        assert!(state.relax(root, node_index(1), 5));
        let next = state.pop().unwrap();

        assert!(!state.relax(next, root, 0));
        assert!(!state.relax(root, next, 1));
        assert_eq!(state.distance(next), 5);
        assert_eq!(state.distance(root), 0);
    }

    #[test]
    fn distances_saturate() {
        let mut state = SearchState::new(2, node_index(0));
        state.pop();

        // INFINITY + w must not wrap around
        assert!(!state.relax(node_index(1), node_index(1), 1));
        assert!(state.relax(node_index(0), node_index(1), Weight::MAX - 1));
        assert_eq!(state.distance(node_index(1)), Weight::MAX - 1);
    }
}
