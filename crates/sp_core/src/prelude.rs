//! Re-exports of the most commonly used items in `sp_core`.
pub use crate::constants::{Weight, INFINITY};
pub use crate::error::GraphError;

pub use crate::search;
pub use crate::search::bidir_dijkstra::BidirDijkstra;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::shortest_path::ShortestPath;
pub use crate::search::ShortestPathSearch;

pub use crate::graph::node_index;
pub use crate::graph::Graph;
pub use crate::graph::GraphBuilder;
