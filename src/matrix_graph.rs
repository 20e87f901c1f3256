//! The dense, fixed-capacity graph representation.

use std::collections::BTreeSet;
use std::fmt;

use fixedbitset::FixedBitSet;

use crate::error::{Error, Result};
use crate::{UnweightedGraph, VertexKey};

/// A graph backed by a boolean adjacency grid over a fixed number of
/// vertex slots.
///
/// The grid is a `capacity × capacity` bit matrix in a row-major packed
/// [`FixedBitSet`]; cell `(i, j)` means "edge from the i-th inserted
/// vertex to the j-th inserted vertex". Vertices occupy slots in
/// insertion order and are found by linear scan, so edge registration is
/// O(capacity) per call. In exchange, edge storage is a single dense bit
/// block: the representation of choice when the vertex count is small and
/// known upfront. For unbounded or sparse graphs see
/// [`ListGraph`](crate::ListGraph).
///
/// Each diagonal cell `(i, i)` is set when the grid is built and stays
/// set for the lifetime of the slot. It marks the slot itself, is never
/// reported by [`get_connections_from`](UnweightedGraph::get_connections_from),
/// and shows up only in the [`Display`](fmt::Display) dump of the grid.
#[derive(Clone, Debug)]
pub struct MatrixGraph<V> {
    capacity: usize,
    directed: bool,
    vertices: Vec<V>,
    edges: FixedBitSet,
}

impl<V: VertexKey> MatrixGraph<V> {
    /// Constructs a directed graph with room for at most `capacity`
    /// vertices. Fails with [`Error::InvalidCapacity`] when `capacity` is
    /// zero or so large that its square grid cannot be indexed.
    pub fn directed(capacity: usize) -> Result<Self> {
        Self::with_capacity(capacity, true)
    }

    /// Constructs an undirected graph with room for at most `capacity`
    /// vertices: every registered edge is recorded in both directions.
    /// Fails with [`Error::InvalidCapacity`] when `capacity` is zero or so
    /// large that its square grid cannot be indexed.
    pub fn undirected(capacity: usize) -> Result<Self> {
        Self::with_capacity(capacity, false)
    }

    fn with_capacity(capacity: usize, directed: bool) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        let cells = capacity.checked_mul(capacity).ok_or(Error::InvalidCapacity)?;
        let mut edges = FixedBitSet::with_capacity(cells);
        for i in 0..capacity {
            edges.insert(i * capacity + i);
        }
        Ok(Self {
            capacity,
            directed,
            vertices: Vec::with_capacity(capacity),
            edges,
        })
    }

    /// The fixed number of vertex slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
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

    /// Slot of `v` in insertion order, or `None` if `v` was never
    /// inserted. Linear scan over the occupied slots.
    fn index_of(&self, v: &V) -> Option<usize> {
        self.vertices.iter().position(|u| u == v)
    }

    #[inline]
    fn index_from_row_column(&self, i: usize, j: usize) -> usize {
        assert!(i < self.capacity);
        assert!(j < self.capacity);
        i * self.capacity + j
    }
}

impl<V: VertexKey> UnweightedGraph<V> for MatrixGraph<V> {
    fn add_edge(&mut self, from: V, to: V) -> Result<()> {
        let self_edge = from == to;
        let fp = self.index_of(&from);
        let tp = if self_edge { fp } else { self.index_of(&to) };

        // Reject before touching anything: a failed call must leave both
        // the slot list and the grid exactly as they were.
        let slots_needed = fp.is_none() as usize + (!self_edge && tp.is_none()) as usize;
        if self.vertices.len() + slots_needed > self.capacity {
            cov_mark::hit!(matrix_capacity_rejected);
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        let fp = match fp {
            Some(i) => i,
            None => {
                self.vertices.push(from);
                self.vertices.len() - 1
            }
        };
        let tp = match tp {
            Some(j) => j,
            None if self_edge => fp,
            None => {
                self.vertices.push(to);
                self.vertices.len() - 1
            }
        };

        let index = self.index_from_row_column(fp, tp);
        self.edges.insert(index);
        if !self.directed {
            cov_mark::hit!(matrix_mirrored_edge);
            let index = self.index_from_row_column(tp, fp);
            self.edges.insert(index);
        }
        Ok(())
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.index_of(v).is_some()
    }

    fn get_vertices(&self) -> Vec<V> {
        self.vertices.clone()
    }

    fn get_connections_from(&self, v: &V) -> Result<BTreeSet<V>> {
        let i = self.index_of(v).ok_or(Error::VertexNotFound)?;
        let mut connected = BTreeSet::new();
        for j in 0..self.vertices.len() {
            if j == i {
                // The diagonal marks the slot, not a self-loop.
                cov_mark::hit!(matrix_self_marker_skipped);
                continue;
            }
            if self.edges[self.index_from_row_column(i, j)] {
                connected.insert(self.vertices[j].clone());
            }
        }
        Ok(connected)
    }
}

/// Tab-separated dump of the occupied grid: one line per inserted vertex,
/// the vertex followed by its `0`/`1` row (diagonal marker included),
/// closed by a blank line.
impl<V: VertexKey + fmt::Display> fmt::Display for MatrixGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            write!(f, "{}\t", v)?;
            for j in 0..self.vertices.len() {
                write!(f, "{}\t", self.edges[self.index_from_row_column(i, j)] as u8)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
