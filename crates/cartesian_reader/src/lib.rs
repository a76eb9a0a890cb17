//! Reader for graphs whose vertices carry planar (x, y) coordinates.
//!
//! The text format is line based:
//!
//! ```text
//! 4            <- number of vertices N
//! 0 0 0        <- N lines "id x y", ids in order 0..N-1
//! 1 0 3
//! 2 4 0
//! 3 4 3
//! 0 1 2        <- any number of adjacency lines "from to1 to2 ..."
//! 3 1 2
//! ```
//!
//! Extra tokens on a vertex line are ignored. Each `to` on an adjacency line
//! produces one directed arc `from -> to`. Weighting the arcs is left to the
//! consumer.
use log::{debug, info};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    num::ParseIntError,
    path::Path,
    str::FromStr,
};
use thiserror::Error;

/// Number of tokens expected to describe a vertex
const VERTEX_TOKENS: usize = 3;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File empty")]
    Empty,

    #[error("Invalid integer {token:?} on line {line}: {source}")]
    InvalidNumber {
        token: String,
        line: usize,
        source: ParseIntError,
    },

    #[error("Number of vertices must be greater than 0 (got {0})")]
    InvalidVertexCount(i64),

    #[error("Illegal number of vertices ({found} vertices, expected {expected})")]
    MissingVertices { found: usize, expected: usize },

    #[error("Invalid number of tokens to describe a vertex on line {line} (got {found}, expected 3)")]
    InvalidTokenCount { line: usize, found: usize },

    #[error("Missing vertex description or bad order (expected id {expected}, got {found})")]
    UnexpectedVertex { expected: usize, found: i64 },

    #[error("Invalid vertex id on line {line} (got {id}, should be in [0, {max}])")]
    InvalidVertexId { line: usize, id: i64, max: usize },
}

pub type Result<T> = std::result::Result<T, ReadError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub source: usize,
    pub target: usize,
}

impl Arc {
    fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}

/// Vertices (indexed by id) and unweighted arcs as read from the input.
#[derive(Debug, Default)]
pub struct CartesianGraph {
    nodes: Vec<[i32; 2]>,
    arcs: Vec<Arc>,
}

impl CartesianGraph {
    /// Coordinates `[x, y]` of every vertex, indexed by vertex id
    pub fn get_nodes(&self) -> &Vec<[i32; 2]> {
        &self.nodes
    }

    pub fn get_arcs(&self) -> &Vec<Arc> {
        &self.arcs
    }

    pub fn from_path(path: &Path) -> Result<CartesianGraph> {
        info!("BEGIN parsing {}", path.display());
        let now = std::time::Instant::now();

        let graph = Self::from_reader(BufReader::new(File::open(path)?))?;

        info!("FINISHED parsing. Took {:?}", now.elapsed());
        Ok(graph)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<CartesianGraph> {
        let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l));

        let (line_no, header) = lines.next().ok_or(ReadError::Empty)?;
        let header = header?;
        let num_nodes: i64 = parse_number(header.trim(), line_no)?;
        if num_nodes <= 0 {
            return Err(ReadError::InvalidVertexCount(num_nodes));
        }
        let num_nodes = num_nodes as usize;

        let mut graph = CartesianGraph {
            nodes: Vec::with_capacity(num_nodes),
            arcs: Vec::new(),
        };

        while graph.nodes.len() < num_nodes {
            let Some((line_no, line)) = lines.next() else {
                return Err(ReadError::MissingVertices {
                    found: graph.nodes.len(),
                    expected: num_nodes,
                });
            };
            let line = line?;
            let tokens: Vec<&str> = line.split_whitespace().collect();

            if tokens.len() < VERTEX_TOKENS {
                return Err(ReadError::InvalidTokenCount {
                    line: line_no,
                    found: tokens.len(),
                });
            }

            let id: i64 = parse_number(tokens[0], line_no)?;
            let x: i32 = parse_number(tokens[1], line_no)?;
            let y: i32 = parse_number(tokens[2], line_no)?;

            let expected = graph.nodes.len();
            if id != expected as i64 {
                return Err(ReadError::UnexpectedVertex {
                    expected,
                    found: id,
                });
            }

            graph.nodes.push([x, y]);
        }

        for (line_no, line) in lines {
            let line = line?;
            let mut ids = line
                .split_whitespace()
                .map(|token| parse_vertex_id(token, line_no, num_nodes));

            let Some(from) = ids.next() else {
                continue;
            };
            let from = from?;

            for to in ids {
                graph.arcs.push(Arc::new(from, to?));
            }
        }

        debug!(
            "Read {} vertices and {} arcs",
            graph.nodes.len(),
            graph.arcs.len()
        );

        Ok(graph)
    }
}

fn parse_number<T: FromStr<Err = ParseIntError>>(token: &str, line: usize) -> Result<T> {
    token
        .parse::<T>()
        .map_err(|source| ReadError::InvalidNumber {
            token: token.to_string(),
            line,
            source,
        })
}

fn parse_vertex_id(token: &str, line: usize, num_nodes: usize) -> Result<usize> {
    let id: i64 = parse_number(token, line)?;
    if id < 0 || id as usize >= num_nodes {
        return Err(ReadError::InvalidVertexId {
            line,
            id,
            max: num_nodes - 1,
        });
    }
    Ok(id as usize)
}
