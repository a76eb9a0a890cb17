use crate::{
    constants::{Coord, Weight},
    error::{GraphError, Result},
    util::math::euclidean_distance,
};
use anyhow::Context;
use cartesian_reader::{Arc, CartesianGraph};
use log::{debug, info};
use std::{fmt, path::Path};

/// Node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex(u32);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A vertex with planar coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex {
    pub id: NodeIndex,
    pub x: Coord,
    pub y: Coord,
}

impl Vertex {
    pub fn new(id: NodeIndex, x: Coord, y: Coord) -> Self {
        Vertex { id, x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }
}

/// Side of a search an adjacency list is read for.
///
/// `Forward` follows the outgoing edges of a node, `Backward` the incoming
/// ones, i.e. it walks the transposed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Immutable directed graph. Built through [`GraphBuilder`].
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Vertex>,
    edges: Vec<Edge>,
    edges_out: Vec<Vec<EdgeIndex>>,
    edges_in: Vec<Vec<EdgeIndex>>,
}

impl Graph {
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Fails with [`GraphError::InvalidId`] if `node_idx` is not part of the graph
    pub fn check_index(&self, node_idx: NodeIndex) -> Result<()> {
        if node_idx.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidId {
                id: node_idx.index(),
                num_nodes: self.nodes.len(),
            })
        }
    }

    pub fn vertex(&self, node_idx: NodeIndex) -> Result<&Vertex> {
        self.check_index(node_idx)?;
        Ok(&self.nodes[node_idx.index()])
    }

    /// Returns an iterator over all vertices of the graph, ordered by id
    pub fn nodes(&self) -> impl Iterator<Item = &Vertex> {
        self.nodes.iter()
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Successor list of `node_idx`
    pub fn neighbors_outgoing(
        &self,
        node_idx: NodeIndex,
    ) -> Result<impl Iterator<Item = &Edge> + '_> {
        self.check_index(node_idx)?;
        Ok(self.edges_out[node_idx.index()]
            .iter()
            .map(move |edge_idx| &self.edges[edge_idx.index()]))
    }

    /// Predecessor list of `node_idx`
    pub fn neighbors_incoming(
        &self,
        node_idx: NodeIndex,
    ) -> Result<impl Iterator<Item = &Edge> + '_> {
        self.check_index(node_idx)?;
        Ok(self.edges_in[node_idx.index()]
            .iter()
            .map(move |edge_idx| &self.edges[edge_idx.index()]))
    }

    pub fn out_degree(&self, node_idx: NodeIndex) -> Result<usize> {
        self.check_index(node_idx)?;
        Ok(self.edges_out[node_idx.index()].len())
    }

    pub fn in_degree(&self, node_idx: NodeIndex) -> Result<usize> {
        self.check_index(node_idx)?;
        Ok(self.edges_in[node_idx.index()].len())
    }

    /// Neighbors of `node_idx` together with the weight of the connecting
    /// edge, seen from the given search direction.
    ///
    /// The caller guarantees that `node_idx` is valid.
    pub(crate) fn neighbors(
        &self,
        node_idx: NodeIndex,
        direction: Direction,
    ) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        let adjacency = match direction {
            Direction::Forward => &self.edges_out[node_idx.index()],
            Direction::Backward => &self.edges_in[node_idx.index()],
        };

        adjacency.iter().map(move |edge_idx| {
            let edge = &self.edges[edge_idx.index()];
            match direction {
                Direction::Forward => (edge.target, edge.weight),
                Direction::Backward => (edge.source, edge.weight),
            }
        })
    }

    pub fn print_info(&self) {
        println!(
            "Graph:\t#Nodes: {}, #Edges: {}",
            self.nodes.len(),
            self.edges.len()
        );
    }

    /// Reads a graph in the Cartesian text format, weighting every arc with
    /// the rounded euclidean distance of its endpoints.
    pub fn from_cartesian(path: &Path) -> anyhow::Result<Self> {
        info!("Parsing graph file: {:?}", path);

        let raw = CartesianGraph::from_path(path).context("Could not parse graph file")?;
        let g = Graph::from_cartesian_graph(&raw).context("Invalid graph")?;

        info!("Finished parsing graph file");
        info!(
            "Graph has {} nodes and {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }

    pub fn from_cartesian_graph(raw: &CartesianGraph) -> Result<Self> {
        let mut builder = GraphBuilder::new(raw.get_nodes().len())?;

        for (id, [x, y]) in raw.get_nodes().iter().enumerate() {
            builder.add_vertex(id, *x, *y)?;
        }

        for Arc { source, target } in raw.get_arcs() {
            builder.add_edge(*source, *target)?;
        }

        builder.build()
    }
}

/// Collects vertices and edges, validates them and freezes them into a
/// [`Graph`].
#[derive(Debug)]
pub struct GraphBuilder {
    nodes: Vec<Option<Vertex>>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Creates a builder for a graph with exactly `num_nodes` vertices
    pub fn new(num_nodes: usize) -> Result<Self> {
        if num_nodes == 0 {
            return Err(GraphError::EmptyGraph);
        }

        Ok(GraphBuilder {
            nodes: vec![None; num_nodes],
            edges: Vec::new(),
        })
    }

    /// Sets the vertex with the given id. Setting an id twice overwrites the
    /// coordinates.
    pub fn add_vertex(&mut self, id: usize, x: Coord, y: Coord) -> Result<NodeIndex> {
        self.check_id(id)?;

        let node_idx = NodeIndex::new(id);
        self.nodes[id] = Some(Vertex::new(node_idx, x, y));

        Ok(node_idx)
    }

    /// Adds a directed edge weighted with the rounded euclidean distance of
    /// both endpoints. Both vertices must have been added before.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<EdgeIndex> {
        let source = self.existing_vertex(from)?;
        let target = self.existing_vertex(to)?;

        let weight = euclidean_distance(&source, &target);
        Ok(self.push_edge(Edge::new(source.id, target.id, weight)))
    }

    /// Adds a directed edge with an explicit weight
    pub fn add_weighted_edge(&mut self, from: usize, to: usize, weight: Weight) -> Result<EdgeIndex> {
        let source = self.existing_vertex(from)?;
        let target = self.existing_vertex(to)?;

        Ok(self.push_edge(Edge::new(source.id, target.id, weight)))
    }

    /// Freezes the graph. Fails if a vertex has not been set.
    pub fn build(self) -> Result<Graph> {
        let num_nodes = self.nodes.len();

        let nodes = self
            .nodes
            .into_iter()
            .enumerate()
            .map(|(id, node)| node.ok_or(GraphError::MissingVertex(id)))
            .collect::<Result<Vec<_>>>()?;

        let mut edges_out = vec![Vec::new(); num_nodes];
        let mut edges_in = vec![Vec::new(); num_nodes];

        for (i, edge) in self.edges.iter().enumerate() {
            edges_out[edge.source.index()].push(EdgeIndex::new(i));
            edges_in[edge.target.index()].push(EdgeIndex::new(i));
        }

        debug!(
            "Built graph with {} nodes and {} edges",
            nodes.len(),
            self.edges.len()
        );

        Ok(Graph {
            nodes,
            edges: self.edges,
            edges_out,
            edges_in,
        })
    }

    fn push_edge(&mut self, edge: Edge) -> EdgeIndex {
        let edge_idx = EdgeIndex::new(self.edges.len());
        self.edges.push(edge);
        edge_idx
    }

    fn check_id(&self, id: usize) -> Result<()> {
        if id < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidId {
                id,
                num_nodes: self.nodes.len(),
            })
        }
    }

    fn existing_vertex(&self, id: usize) -> Result<Vertex> {
        self.check_id(id)?;
        self.nodes[id].ok_or(GraphError::MissingVertex(id))
    }
}
