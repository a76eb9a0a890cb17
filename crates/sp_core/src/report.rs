//! Formatting of search results and the CSV report comparing both engines.
use std::{fs::File, path::Path};

use anyhow::Context;
use serde::Serialize;

use crate::{
    constants::Weight,
    graph::NodeIndex,
    search::shortest_path::ShortestPath,
};

/// Human readable weight, `inf` for unreachable targets
pub fn format_weight(weight: Weight) -> String {
    if weight == crate::constants::INFINITY {
        "inf".to_string()
    } else {
        weight.to_string()
    }
}

/// One line summary of a search, e.g.
/// `From 0 to 3 : 7 [0, 1, 3] in 4 steps and 3 nodes visited`
pub fn format_result(source: NodeIndex, target: NodeIndex, sp: &ShortestPath) -> String {
    let nodes: Vec<String> = sp.nodes().iter().map(|node| node.to_string()).collect();

    format!(
        "From {} to {} : {} [{}] in {} steps and {} nodes visited",
        source,
        target,
        format_weight(sp.weight()),
        nodes.join(", "),
        sp.steps(),
        sp.nodes_visited()
    )
}

/// Row of the comparison report. Unreachable distances are left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRecord {
    pub distance_bidirectional: Option<Weight>,
    pub distance_simple: Option<Weight>,
    pub visited_bidirectional: usize,
    pub visited_simple: usize,
    pub path_len_bidirectional: usize,
    pub path_len_simple: usize,
}

impl ComparisonRecord {
    pub fn new(simple: &ShortestPath, bidirectional: &ShortestPath) -> Self {
        let distance = |sp: &ShortestPath| sp.is_reachable().then(|| sp.weight());

        ComparisonRecord {
            distance_bidirectional: distance(bidirectional),
            distance_simple: distance(simple),
            visited_bidirectional: bidirectional.nodes_visited(),
            visited_simple: simple.nodes_visited(),
            path_len_bidirectional: bidirectional.len(),
            path_len_simple: simple.len(),
        }
    }

    pub fn distances_match(&self) -> bool {
        self.distance_bidirectional == self.distance_simple
    }
}

/// Totals over all compared queries
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ComparisonSummary {
    pub queries: usize,
    pub mismatches: usize,
    pub visited_simple: u64,
    pub visited_bidirectional: u64,
    pub bidirectional_slower: usize,
}

impl ComparisonSummary {
    /// Adds a record to the totals. Records with differing distances are
    /// only counted as mismatch.
    pub fn add(&mut self, record: &ComparisonRecord) {
        self.queries += 1;

        if !record.distances_match() {
            self.mismatches += 1;
            return;
        }

        self.visited_simple += record.visited_simple as u64;
        self.visited_bidirectional += record.visited_bidirectional as u64;
        if record.visited_bidirectional > record.visited_simple {
            self.bidirectional_slower += 1;
        }
    }

    /// Nodes visited by the bidirectional search in percent of the nodes
    /// visited by the simple search
    pub fn visited_ratio(&self) -> Option<f64> {
        if self.visited_simple == 0 {
            return None;
        }
        Some(self.visited_bidirectional as f64 * 100.0 / self.visited_simple as f64)
    }
}

pub fn write_csv(path: &Path, records: &[ComparisonRecord]) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("Could not create {:?}", path))?;
    let mut wtr = csv::Writer::from_writer(file);

    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}
