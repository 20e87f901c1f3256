//! The sparse, unbounded graph representation.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{Error, Result};
use crate::{UnweightedGraph, VertexKey};

/// A graph backed by an ordered vertex set plus an ordered adjacency
/// mapping, with no capacity limit.
///
/// Every vertex, including one only ever mentioned as an edge target,
/// owns an adjacency row; a row may be empty. Memory grows with what is
/// actually inserted, and lookups are O(log V), which makes this the
/// representation of choice for large, sparse, or open-ended vertex
/// populations. For small graphs of known maximum size see
/// [`MatrixGraph`](crate::MatrixGraph).
#[derive(Clone, Debug)]
pub struct ListGraph<V> {
    directed: bool,
    vertices: BTreeSet<V>,
    edges: BTreeMap<V, BTreeSet<V>>,
}

impl<V: VertexKey> ListGraph<V> {
    /// Constructs an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Constructs an empty undirected graph: every registered edge is
    /// recorded in both directions.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    fn new(directed: bool) -> Self {
        Self {
            directed,
            vertices: BTreeSet::new(),
            edges: BTreeMap::new(),
        }
    }

    /// How many vertices have been inserted so far.
    #[inline]
    pub fn get_vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether edges are one-way, as opposed to mirrored on insertion.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<V: VertexKey> UnweightedGraph<V> for ListGraph<V> {
    fn add_edge(&mut self, from: V, to: V) -> Result<()> {
        self.vertices.insert(from.clone());
        self.vertices.insert(to.clone());
        // The target gets a row even when nothing points out of it yet, so
        // an edge-less vertex still answers queries with the empty set.
        let target_row = self.edges.entry(to.clone()).or_default();
        if !self.directed {
            cov_mark::hit!(list_mirrored_edge);
            target_row.insert(from.clone());
        }
        self.edges.entry(from).or_default().insert(to);
        Ok(())
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    fn get_vertices(&self) -> Vec<V> {
        self.vertices.iter().cloned().collect()
    }

    fn get_connections_from(&self, v: &V) -> Result<BTreeSet<V>> {
        self.edges.get(v).cloned().ok_or(Error::VertexNotFound)
    }
}

/// Tab-separated dump: one line per vertex in ascending order, the vertex
/// followed by its neighbour set, closed by a blank line.
impl<V: VertexKey + fmt::Display> fmt::Display for ListGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in &self.vertices {
            write!(f, "{}\t", v)?;
            for neighbour in &self.edges[v] {
                write!(f, "{}\t", neighbour)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
