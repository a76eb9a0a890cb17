use crate::constants::INFINITY;
use crate::error::Result;
use crate::graph::*;
use crate::search::search_state::SearchState;
use crate::search::shortest_path::ShortestPath;
use crate::search::ShortestPathSearch;
use crate::statistics::SearchStats;
use log::{debug, info};

pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self, source: NodeIndex, target: NodeIndex) -> Result<ShortestPath> {
        self.g.check_index(source)?;
        self.g.check_index(target)?;

        self.stats.init();

        let mut state = SearchState::new(self.g.num_nodes(), source);

        while let Some(node) = state.pop() {
            self.stats.nodes_settled += 1;

            // Everything left in the queue is unreachable
            if state.distance(node) == INFINITY {
                break;
            }

            if node == target {
                break;
            }

            for (neighbor, weight) in self.g.neighbors(node, Direction::Forward) {
                self.stats.edges_relaxed += 1;
                state.relax(node, neighbor, weight);
            }
        }
        self.stats.finish();

        let weight = state.distance(target);
        let sp = if weight == INFINITY {
            info!(
                "No path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
            ShortestPath::new(
                Vec::new(),
                weight,
                self.stats.edges_relaxed,
                self.stats.nodes_settled,
            )
        } else {
            let sp = ShortestPath::new(
                state.path_to(target),
                weight,
                self.stats.edges_relaxed,
                self.stats.nodes_settled,
            );
            debug!("Path found: {:?}", sp);
            info!(
                "Path found: {:?}/{} nodes settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
            sp
        };

        Ok(sp)
    }
}

impl<'a> ShortestPathSearch for Dijkstra<'a> {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn run(&mut self, source: NodeIndex, target: NodeIndex) -> Result<ShortestPath> {
        self.search(source, target)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }
}
