use std::path::Path;

use cartesian_reader::*;

fn main() -> anyhow::Result<()> {
    let now = std::time::Instant::now();
    // Read path to file from command line
    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("No path to graph file given"))?;

    let graph = CartesianGraph::from_path(Path::new(&path))?;

    let elapsed = now.elapsed();

    println!(
        "Finished reading graph file in {}.{:03} seconds",
        elapsed.as_secs(),
        elapsed.subsec_millis()
    );
    println!(
        "Graph has {} nodes and {} arcs",
        graph.get_nodes().len(),
        graph.get_arcs().len()
    );
    Ok(())
}
