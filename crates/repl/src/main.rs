//! Interactive shell to query shortest paths on a Cartesian graph
use std::path::{Path, PathBuf};

use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use sp_core::{
    graph::{node_index, Graph},
    report::{format_result, format_weight},
    search::{bidir_dijkstra::BidirDijkstra, dijkstra::Dijkstra, ShortestPathSearch},
    statistics::{average_in_degree, average_out_degree},
};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} nodes and {} edges (avg. out degree {:.2}, avg. in degree {:.2})",
        context.graph.num_nodes(),
        context.graph.num_edges(),
        average_out_degree(&context.graph),
        average_in_degree(&context.graph)
    )))
}

fn run_search(args: &ArgMatches, engine: &mut dyn ShortestPathSearch) -> Result<Option<String>> {
    let src = node_index(*args.get_one::<usize>("src").unwrap());
    let dst = node_index(*args.get_one::<usize>("dst").unwrap());

    match engine.run(src, dst) {
        Ok(sp) => Ok(Some(format!(
            "{}\nTook: {:?}",
            format_result(src, dst, &sp),
            engine.stats().duration
        ))),
        Err(err) => Ok(Some(err.to_string())),
    }
}

fn run_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    run_search(&args, &mut Dijkstra::new(&context.graph))
}

fn run_bidir(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    run_search(&args, &mut BidirDijkstra::new(&context.graph))
}

fn measure(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);
    let num_nodes = context.graph.num_nodes();

    // Select n random start and end nodes
    let mut rng = rand::thread_rng();
    let pairs: Vec<(usize, usize)> = (0..n)
        .map(|_| (rng.gen_range(0..num_nodes), rng.gen_range(0..num_nodes)))
        .collect();

    let mut dijkstra = Dijkstra::new(&context.graph);
    let mut bidir = BidirDijkstra::new(&context.graph);

    let mut res = String::new();
    for (src, dst) in pairs {
        let (src, dst) = (node_index(src), node_index(dst));
        let (Ok(simple), Ok(bidirectional)) = (dijkstra.search(src, dst), bidir.search(src, dst))
        else {
            continue;
        };

        res.push_str(&format!(
            "{} -> {}: {} | dijkstra {} visited in {:?} | bidir {} visited in {:?}\n",
            src,
            dst,
            format_weight(simple.weight()),
            simple.nodes_visited(),
            dijkstra.stats.duration,
            bidirectional.nodes_visited(),
            bidir.stats.duration
        ));
    }

    Ok(Some(res))
}

struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

fn path_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("src")
                .value_parser(value_parser!(usize))
                .required(true)
                .help("ID of source node"),
        )
        .arg(
            Arg::new("dst")
                .value_parser(value_parser!(usize))
                .required(true)
                .help("ID of destination node"),
        )
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph
    let path = std::env::args().nth(1).expect("No path to graph file given");
    let graph = Graph::from_cartesian(Path::new(&path)).expect("Failed to read graph file");
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to compare shortest path algorithms")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            path_args(Command::new("dijk"))
                .about("Calculate shortest path using Dijkstra's algorithm"),
            run_dijkstra,
        )
        .with_command(
            path_args(Command::new("bidir"))
                .about("Calculate shortest path using bidirectional Dijkstra"),
            run_bidir,
        )
        .with_command(
            Command::new("measure")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random shortest paths to calculate"),
                )
                .about("Compare both algorithms on `n` random queries"),
            measure,
        );

    repl.run()
}
