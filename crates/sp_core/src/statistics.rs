use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::graph::{Graph, NodeIndex};

/// Counters of the last search run by an engine.
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub edges_relaxed: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.edges_relaxed = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled, {} edges relaxed in {:?}",
            self.nodes_settled, self.edges_relaxed, self.duration
        )
    }
}

fn degree_sum(g: &Graph, outgoing: bool) -> usize {
    (0..g.num_nodes())
        .map(NodeIndex::new)
        .map(|node| {
            if outgoing {
                g.out_degree(node)
            } else {
                g.in_degree(node)
            }
            .unwrap_or(0)
        })
        .sum()
}

pub fn average_in_degree(g: &Graph) -> f64 {
    degree_sum(g, false) as f64 / g.num_nodes() as f64
}

pub fn average_out_degree(g: &Graph) -> f64 {
    degree_sum(g, true) as f64 / g.num_nodes() as f64
}
