//! Implementation of the bidirectional Dijkstra search algorithm.
//!
//! A forward search from the source and a backward search (over incoming
//! edges) from the target are advanced alternately. Whenever an inspected
//! edge leads into a node the opposite search has already settled, the
//! length of the path crossing that edge is a candidate for the upper bound
//! `best_weight` (often called `mu`). The search stops as soon as one side
//! settles a node the other side has settled before; at that point no
//! shorter crossing can be left.
use crate::constants::{Weight, INFINITY};
use crate::error::Result;
use crate::graph::*;
use crate::search::search_state::SearchState;
use crate::search::shortest_path::ShortestPath;
use crate::search::ShortestPathSearch;
use crate::statistics::SearchStats;
use log::{debug, info};

/// Edge (or single node) where the forward and the backward search trees
/// are joined.
///
/// `fwd_node` is reached by the forward search, `bwd_node` by the backward
/// search and `fwd_node -> bwd_node` is an edge of the graph. Both are the
/// same node if the trees meet in a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meeting {
    pub fwd_node: NodeIndex,
    pub bwd_node: NodeIndex,
}

impl Meeting {
    fn at_node(node: NodeIndex) -> Self {
        Meeting {
            fwd_node: node,
            bwd_node: node,
        }
    }

    /// Orients the inspected edge `node -> neighbor` of the given direction
    /// from source to target
    fn crossing(direction: Direction, node: NodeIndex, neighbor: NodeIndex) -> Self {
        match direction {
            Direction::Forward => Meeting {
                fwd_node: node,
                bwd_node: neighbor,
            },
            Direction::Backward => Meeting {
                fwd_node: neighbor,
                bwd_node: node,
            },
        }
    }
}

pub struct BidirDijkstra<'a> {
    pub stats: SearchStats,
    pub best_weight: Weight,
    pub meeting: Option<Meeting>,
    g: &'a Graph,
}

impl<'a> BidirDijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        BidirDijkstra {
            g: graph,
            stats: SearchStats::default(),
            best_weight: INFINITY,
            meeting: None,
        }
    }

    pub fn init(&mut self) {
        self.best_weight = INFINITY;
        self.meeting = None;
        self.stats.init();
    }

    /// Settles the next node of `this` search.
    ///
    /// Returns `false` if the whole search has to stop: `this` side is
    /// exhausted or the frontiers met.
    fn step(&mut self, this: &mut SearchState, other: &SearchState, direction: Direction) -> bool {
        let Some(node) = this.pop() else {
            return false;
        };
        self.stats.nodes_settled += 1;

        let distance = this.distance(node);
        if distance == INFINITY {
            return false;
        }

        let g = self.g;
        for (neighbor, weight) in g.neighbors(node, direction) {
            self.stats.edges_relaxed += 1;
            this.relax(node, neighbor, weight);

            if other.is_settled(neighbor) {
                let candidate = distance
                    .saturating_add(weight)
                    .saturating_add(other.distance(neighbor));

                if candidate < self.best_weight {
                    self.best_weight = candidate;
                    self.meeting = Some(Meeting::crossing(direction, node, neighbor));
                    debug!("{:?}: new best_weight: {}", direction, self.best_weight);
                }
            }
        }

        if other.is_settled(node) {
            // Covers source == target, where no crossing edge exists
            let candidate = distance.saturating_add(other.distance(node));
            if candidate < self.best_weight {
                self.best_weight = candidate;
                self.meeting = Some(Meeting::at_node(node));
            }
            debug!("{:?}: frontiers met in {}", direction, node);
            return false;
        }

        true
    }

    /// Joins the forward path `source -> fwd_node` and the backward path
    /// `bwd_node -> target`.
    fn reconstruct_shortest_path(
        fwd: &SearchState,
        bwd: &SearchState,
        meeting: Meeting,
    ) -> Vec<NodeIndex> {
        let mut path = fwd.path_to(meeting.fwd_node);
        debug!("Path fwd: {:?}", &path);

        // Backward predecessors point towards the target
        let mut path_bwd = bwd.path_to(meeting.bwd_node);
        path_bwd.reverse();
        debug!("Path bwd: {:?}", &path_bwd);

        let skip = usize::from(meeting.fwd_node == meeting.bwd_node);
        path.extend(path_bwd.into_iter().skip(skip));

        path
    }

    pub fn search(&mut self, source: NodeIndex, target: NodeIndex) -> Result<ShortestPath> {
        self.g.check_index(source)?;
        self.g.check_index(target)?;

        self.init();

        info!(
            "BEGIN bidir. DIJKSTRA SEARCH from {:?} to {:?}",
            source, target
        );

        let mut fwd = SearchState::new(self.g.num_nodes(), source);
        let mut bwd = SearchState::new(self.g.num_nodes(), target);

        while self.step(&mut fwd, &bwd, Direction::Forward)
            && self.step(&mut bwd, &fwd, Direction::Backward)
        {}

        self.stats.finish();

        info!("Meeting: {:?}", self.meeting);
        info!("Weight: {}", self.best_weight);

        let nodes = match self.meeting {
            Some(meeting) if self.best_weight != INFINITY => {
                info!("{}, weight: {}", self.stats, self.best_weight);
                Self::reconstruct_shortest_path(&fwd, &bwd, meeting)
            }
            _ => {
                info!("No path found");
                Vec::new()
            }
        };

        Ok(ShortestPath::new(
            nodes,
            self.best_weight,
            self.stats.edges_relaxed,
            self.stats.nodes_settled,
        ))
    }
}

impl<'a> ShortestPathSearch for BidirDijkstra<'a> {
    fn name(&self) -> &'static str {
        "bidirectional"
    }

    fn run(&mut self, source: NodeIndex, target: NodeIndex) -> Result<ShortestPath> {
        self.search(source, target)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::error::GraphError;
    use crate::search::dijkstra::Dijkstra;
    use crate::search::{assert_no_path, assert_path, assert_valid_path};
    use crate::util::test_graphs::{
        generate_cartesian_graph, generate_complex_graph, generate_directed_graph,
        generate_simple_graph, generate_square_graph,
    };

    use super::*;

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn simple_path() {
        //      7 -> 8 -> 9
        //      |         |
        // 0 -> 5 -> 6 -  |
        // |         |  \ |
        // 1 -> 2 -> 3 -> 4
        init_log();
        let g = generate_directed_graph();

        let mut d = BidirDijkstra::new(&g);

        assert_no_path(d.search(node_index(4), node_index(0))); // Cannot be reached
        assert_path(vec![0, 5, 7, 8, 9, 4], 13, d.search(0.into(), 4.into()));
        assert_path(vec![6, 3], 20, d.search(6.into(), 3.into()));
        assert_path(vec![4], 0, d.search(4.into(), 4.into()));
        assert_path(vec![1, 2, 3, 4], 22, d.search(1.into(), 4.into()));
    }

    #[test]
    fn disconnected_graph() {
        // 0 -> 1 -> 2
        // 3 -> 4 -> 5
        let mut g = GraphBuilder::new(6).unwrap();
        for i in 0..6 {
            g.add_vertex(i, 0, 0).unwrap();
        }

        g.add_weighted_edge(0, 1, 1).unwrap();
        g.add_weighted_edge(1, 2, 1).unwrap();
        g.add_weighted_edge(3, 4, 3).unwrap();
        g.add_weighted_edge(4, 5, 1).unwrap();
        let g = g.build().unwrap();

        let mut d = BidirDijkstra::new(&g);

        assert_no_path(d.search(0.into(), 3.into()));
        assert_eq!(d.meeting, None);
        assert_no_path(d.search(3.into(), 0.into()));
        assert_path(vec![0, 1, 2], 2, d.search(0.into(), 2.into()));
        assert_path(vec![3, 4, 5], 4, d.search(3.into(), 5.into()));
    }

    #[test]
    fn isolated_node() {
        let g = generate_cartesian_graph(&[(0, 0), (5, 5), (0, 3)], &[(0, 2)]);

        let mut d = BidirDijkstra::new(&g);
        assert_no_path(d.search(0.into(), 1.into()));
        assert_no_path(d.search(1.into(), 0.into()));
        assert_path(vec![2, 0], 3, d.search(2.into(), 0.into()));
    }

    #[test]
    fn go_around() {
        // 0 -> 1
        // |    |
        // 2 -> 3
        let mut g = GraphBuilder::new(4).unwrap();
        for i in 0..4 {
            g.add_vertex(i, 0, 0).unwrap();
        }

        g.add_weighted_edge(0, 1, 10).unwrap();
        g.add_weighted_edge(0, 2, 1).unwrap();
        g.add_weighted_edge(2, 3, 1).unwrap();
        g.add_weighted_edge(3, 1, 1).unwrap();
        let g = g.build().unwrap();

        let mut d = BidirDijkstra::new(&g);

        assert_path(vec![0, 2, 3, 1], 3, d.search(0.into(), 1.into()));
    }

    #[test]
    fn square_has_two_shortest_paths() {
        init_log();
        let g = generate_square_graph();
        let mut d = BidirDijkstra::new(&g);

        let sp = d.search(0.into(), 3.into()).unwrap();

        assert_eq!(sp.weight(), 7);
        assert!(
            sp.nodes() == [node_index(0), node_index(1), node_index(3)]
                || sp.nodes() == [node_index(0), node_index(2), node_index(3)]
        );
        assert_valid_path(&g, 0.into(), 3.into(), &sp);

        // Edges are directed
        assert_no_path(d.search(3.into(), 0.into()));
    }

    #[test]
    fn same_source_and_target() {
        let mut g = GraphBuilder::new(1).unwrap();
        g.add_vertex(0, 1, 1).unwrap();
        let g = g.build().unwrap();

        let mut d = BidirDijkstra::new(&g);
        assert_path(vec![0], 0, d.search(0.into(), 0.into()));
        assert_eq!(d.meeting, Some(Meeting::at_node(node_index(0))));

        let g = generate_complex_graph();
        let mut d = BidirDijkstra::new(&g);
        for node in 0..g.num_nodes() {
            assert_path(vec![node], 0, d.search(node.into(), node.into()));
        }
    }

    #[test]
    fn neighbors() {
        let g = generate_simple_graph();
        let mut d = BidirDijkstra::new(&g);

        // E -> A -> C -> B
        assert_path(vec![4, 0, 2, 1], 3, d.search(4.into(), 1.into()));
        assert_path(vec![0, 2], 1, d.search(0.into(), 2.into()));
        assert_no_path(d.search(0.into(), 4.into()));
    }

    #[test]
    fn search_on_complex_graph() {
        init_log();
        let g = generate_complex_graph();

        let mut bdir = BidirDijkstra::new(&g);

        let sp = bdir.search(node_index(1), node_index(6)); // B -> G
        assert_path(vec![1, 2, 9, 7, 6], 10, sp);

        let sp = bdir.search(node_index(0), node_index(6)); // A -> G
        assert_path(vec![0, 10, 9, 7, 6], 11, sp);
    }

    #[test]
    fn line_graph() {
        // 0 - 1 - 2 - ... - 19
        let coords: Vec<(i32, i32)> = (0..20).map(|x| (x, 0)).collect();
        let links: Vec<(usize, usize)> = (0..19).map(|x| (x, x + 1)).collect();
        let g = generate_cartesian_graph(&coords, &links);

        let mut dijkstra = Dijkstra::new(&g);
        let mut bidir = BidirDijkstra::new(&g);

        let sp = dijkstra.search(8.into(), 12.into()).unwrap();
        let sp_bidir = bidir.search(8.into(), 12.into()).unwrap();

        assert_eq!(sp.weight(), 4);
        assert_eq!(sp_bidir.weight(), 4);
        assert_eq!(sp.nodes(), sp_bidir.nodes());

        let sp_bidir = bidir.search(19.into(), 0.into()).unwrap();
        assert_eq!(sp_bidir.weight(), 19);
        assert_eq!(sp_bidir.len(), 20);
    }

    #[test]
    fn invalid_ids() {
        let g = generate_square_graph();
        let mut d = BidirDijkstra::new(&g);

        assert_eq!(
            d.search(4.into(), 0.into()),
            Err(GraphError::InvalidId {
                id: 4,
                num_nodes: 4
            })
        );
        assert!(d.search(0.into(), 17.into()).is_err());
    }

    fn test_search(g: &Graph, a: usize, b: usize) {
        let a = node_index(a);
        let b = node_index(b);

        let mut dijkstra = Dijkstra::new(g);
        let sp_ab = dijkstra.search(a, b).unwrap();
        let sp_ba = dijkstra.search(b, a).unwrap();

        let mut bidir = BidirDijkstra::new(g);
        let sp_bidir_ab = bidir.search(a, b).unwrap();
        let sp_bidir_ba = bidir.search(b, a).unwrap();

        assert_eq!(sp_ab.weight(), sp_bidir_ab.weight());
        assert_eq!(sp_ba.weight(), sp_bidir_ba.weight());

        for (s, t, sp) in [
            (a, b, &sp_ab),
            (a, b, &sp_bidir_ab),
            (b, a, &sp_ba),
            (b, a, &sp_bidir_ba),
        ] {
            if sp.is_reachable() {
                assert_valid_path(g, s, t, sp);
            } else {
                assert!(sp.is_empty());
            }
        }
    }

    #[test]
    fn search_on_all_pairs_of_complex_graph() {
        let g = generate_complex_graph();
        let num_nodes = g.num_nodes();

        for a in 0..num_nodes {
            for b in 0..num_nodes {
                test_search(&g, a, b);
            }
        }
    }

    #[test]
    fn search_on_directed_graph() {
        let g = generate_directed_graph();

        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&(0..g.num_nodes(), 0..g.num_nodes()), |(a, b)| {
                test_search(&g, a, b);
                Ok(())
            })
            .unwrap();
    }

    /// Random directed graph with `num_nodes` nodes and weighted edges
    fn arb_graph() -> impl Strategy<Value = Graph> {
        (1usize..25).prop_flat_map(|num_nodes| {
            prop::collection::vec((0..num_nodes, 0..num_nodes, 0u64..50), 0..80).prop_map(
                move |edges| {
                    let mut g = GraphBuilder::new(num_nodes).unwrap();
                    for id in 0..num_nodes {
                        g.add_vertex(id, 0, 0).unwrap();
                    }
                    for (from, to, weight) in edges {
                        g.add_weighted_edge(from, to, weight).unwrap();
                    }
                    g.build().unwrap()
                },
            )
        })
    }

    /// Random symmetric graph as produced by the Cartesian reader
    fn arb_cartesian_graph() -> impl Strategy<Value = Graph> {
        (2usize..25).prop_flat_map(|num_nodes| {
            (
                prop::collection::vec((-100i32..100, -100i32..100), num_nodes),
                prop::collection::vec((0..num_nodes, 0..num_nodes), 0..60),
            )
                .prop_map(|(coords, links)| generate_cartesian_graph(&coords, &links))
        })
    }

    proptest! {
        #[test]
        fn bidir_matches_dijkstra_on_random_graphs(
            (g, a, b) in arb_graph().prop_flat_map(|g| {
                let n = g.num_nodes();
                (Just(g), 0..n, 0..n)
            })
        ) {
            test_search(&g, a, b);
        }

        #[test]
        fn bidir_matches_dijkstra_on_random_cartesian_graphs(
            (g, a, b) in arb_cartesian_graph().prop_flat_map(|g| {
                let n = g.num_nodes();
                (Just(g), 0..n, 0..n)
            })
        ) {
            test_search(&g, a, b);
        }
    }
}
