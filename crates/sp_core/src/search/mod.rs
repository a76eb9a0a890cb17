use crate::{error::Result, graph::NodeIndex, statistics::SearchStats};

use self::shortest_path::ShortestPath;

pub mod bidir_dijkstra;
pub mod dijkstra;
pub mod search_state;
pub mod shortest_path;

/// Common interface of the shortest path engines so drivers can run either
/// of them against the same graph.
pub trait ShortestPathSearch {
    /// Name used in logs and reports
    fn name(&self) -> &'static str;

    fn run(&mut self, source: NodeIndex, target: NodeIndex) -> Result<ShortestPath>;

    /// Statistics of the last run
    fn stats(&self) -> &SearchStats;
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: crate::constants::Weight,
    sp: Result<ShortestPath>,
) {
    let sp = sp.expect("search failed");
    let nodes: Vec<usize> = sp.nodes().iter().map(|node| node.index()).collect();

    assert_eq!(expected_path, nodes);
    assert_eq!(expected_weight, sp.weight());
}

#[cfg(test)]
pub(crate) fn assert_no_path(sp: Result<ShortestPath>) {
    let sp = sp.expect("search failed");

    assert!(!sp.is_reachable());
    assert_eq!(crate::constants::INFINITY, sp.weight());
    assert!(sp.is_empty());
}

/// Checks that the path runs from `source` to `target` along existing edges
/// and that its edge weights add up to the reported weight.
#[cfg(test)]
pub(crate) fn assert_valid_path(
    g: &crate::graph::Graph,
    source: NodeIndex,
    target: NodeIndex,
    sp: &ShortestPath,
) {
    let nodes = sp.nodes();
    assert_eq!(Some(&source), nodes.first());
    assert_eq!(Some(&target), nodes.last());

    let mut total = 0;
    for pair in nodes.windows(2) {
        let weight = g
            .neighbors_outgoing(pair[0])
            .unwrap()
            .filter(|edge| edge.target == pair[1])
            .map(|edge| edge.weight)
            .min()
            .unwrap_or_else(|| panic!("No edge {} -> {}", pair[0], pair[1]));
        total += weight;
    }

    assert_eq!(sp.weight(), total);
}
