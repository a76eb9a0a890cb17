//! Runs both engines on random source/target pairs and reports how many
//! nodes each of them visits.
use anyhow::Context;
use indicatif::ProgressBar;
use log::{info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use sp_core::{
    graph::{node_index, Graph},
    report::{self, ComparisonRecord, ComparisonSummary},
    search::{bidir_dijkstra::BidirDijkstra, dijkstra::Dijkstra},
    util::cli,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cfg = cli::parse();

    let g = Graph::from_cartesian(&cfg.graph_file)
        .with_context(|| format!("Failed to load {:?}", cfg.graph_file))?;
    let num_nodes = g.num_nodes();

    println!("====== Run with seed {} ======", cfg.seed);
    println!("Graph size: {}", num_nodes);
    println!("Number of iterations: {}", cfg.iterations);

    let mut rng = StdRng::seed_from_u64(cfg.seed);

    let mut dijkstra = Dijkstra::new(&g);
    let mut bidir = BidirDijkstra::new(&g);

    let mut records = Vec::with_capacity(cfg.iterations);
    let mut summary = ComparisonSummary::default();

    let pb = ProgressBar::new(cfg.iterations as u64);

    for i in 0..cfg.iterations {
        let source = node_index(rng.gen_range(0..num_nodes));
        let target = node_index(rng.gen_range(0..num_nodes));

        let sp_simple = dijkstra.search(source, target)?;
        let sp_bidir = bidir.search(source, target)?;

        let record = ComparisonRecord::new(&sp_simple, &sp_bidir);
        summary.add(&record);

        if !record.distances_match() {
            warn!(
                "Distance mismatch with seed {} on iteration {}, from {} to {} (simple: {}, bidirectional: {})",
                cfg.seed,
                i,
                source,
                target,
                report::format_weight(sp_simple.weight()),
                report::format_weight(sp_bidir.weight())
            );
        } else {
            if record.visited_bidirectional > record.visited_simple {
                info!(
                    "Bidirectional visited more nodes on iteration {}, from {} to {} (simple: {}, bidirectional: {})",
                    i, source, target, record.visited_simple, record.visited_bidirectional
                );
            }
            records.push(record);
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    report::write_csv(&cfg.output, &records)?;

    println!("=========== Results ===========");
    println!(
        "Simple: {} bidirectional: {}",
        summary.visited_simple, summary.visited_bidirectional
    );
    if let Some(ratio) = summary.visited_ratio() {
        println!("Bidirectional visits {:.2}% of the nodes of simple", ratio);
    }
    if summary.mismatches > 0 {
        println!("{} queries with differing distances", summary.mismatches);
    }
    println!(
        "Bidirectional visited more nodes in {} of {} queries",
        summary.bidirectional_slower, summary.queries
    );
    println!("Results stored in {}", cfg.output.display());

    Ok(())
}
