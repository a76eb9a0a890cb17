use std::path::PathBuf;

use clap::Parser;

/// Default seed so runs stay comparable
pub const DEFAULT_SEED: u64 = 20220404;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to the graph file (Cartesian text format)
    graph_file: String,

    /// Number of random source/target pairs
    #[arg(short, long, default_value_t = 1000)]
    iterations: usize,

    /// Seed of the random number generator
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// File the per-query results are written to
    #[arg(short, long, value_name = "csv", default_value = "results.csv")]
    output: String,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub graph_file: PathBuf,
    pub iterations: usize,
    pub seed: u64,
    pub output: PathBuf,
}

pub fn parse() -> Cfg {
    Cli::parse().into_cfg()
}

impl Cli {
    fn into_cfg(self) -> Cfg {
        Cfg {
            graph_file: PathBuf::from(self.graph_file),
            iterations: self.iterations,
            seed: self.seed,
            output: PathBuf::from(self.output),
        }
    }
}
