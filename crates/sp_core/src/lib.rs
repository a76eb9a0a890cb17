//! Crate to compute shortest paths on graphs with planar coordinates, using
//! either a classic or a bidirectional Dijkstra search.
//!
//! # Basic usage
//! ```no_run
//! use sp_core::prelude::*;
//! use std::path::Path;
//!
//! // Path to a graph in the Cartesian text format
//! let path = Path::new("path/to/graph.txt");
//!
//! // Create a new graph
//! let g = Graph::from_cartesian(path).expect("Failed to read graph");
//!
//! // Search from node 3 to node 20
//! let mut bidir = BidirDijkstra::new(&g);
//! let sp = bidir.search(node_index(3), node_index(20)).expect("Invalid node id");
//!
//! if sp.is_reachable() {
//!     println!("Costs: {}", sp.weight());
//! }
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod report;
pub mod search;
pub mod statistics;
pub mod util;
