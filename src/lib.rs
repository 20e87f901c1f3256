//! Unweighted directed and undirected graphs over arbitrary ordered vertex
//! types, with two interchangeable backing representations and
//! representation-agnostic traversals.
//!
//! Both representations implement the same [`UnweightedGraph`] capability
//! contract:
//!
//! * [`MatrixGraph`] stores edges as a dense boolean grid over a fixed
//!   number of vertex slots: O(1) edge storage, O(V) vertex lookup by
//!   linear scan. Suited to small graphs whose maximum size is known
//!   upfront.
//! * [`ListGraph`] stores an ordered adjacency mapping with no capacity
//!   limit: O(log V) lookups, memory proportional to what is actually
//!   inserted. Suited to sparse or unbounded vertex populations.
//!
//! Building the same edge set in either representation yields the same
//! neighbour sets and the same [`dfs`]/[`bfs`] reachable sets; choosing
//! between the two is purely a storage/performance trade-off.
//!
//! Vertices are caller-supplied values satisfying [`VertexKey`] (equality,
//! total order, cloneability). Vertex identity is value equality: two equal
//! values are the same vertex. There is no separate "insert vertex"
//! operation; endpoints are inserted implicitly by
//! [`UnweightedGraph::add_edge`].
//!
//! ## Anti-features
//!
//! * No vertex or edge payloads, and no edge weights.
//! * No edge or vertex removal. Graphs grow monotonically.
//! * No serde impls and no persistence. The [`std::fmt::Display`] dumps
//!   are for human inspection, not machine parsing.
//! * No synchronization. Mutate a graph under exclusive ownership; share
//!   it read-only afterwards.
//!
//! # Example
//!
//! ```
//! use ugraph::{bfs, dfs, MatrixGraph, UnweightedGraph};
//!
//! let mut graph = MatrixGraph::directed(5)?;
//! graph.add_edge('A', 'B')?;
//! graph.add_edge('B', 'C')?;
//! graph.add_edge('B', 'D')?;
//! graph.add_edge('C', 'E')?;
//! graph.add_edge('D', 'C')?;
//! graph.add_edge('E', 'D')?;
//!
//! assert_eq!(graph.get_connections_from(&'B')?, ['C', 'D'].into());
//! assert_eq!(dfs('B', &graph)?, ['B', 'C', 'D', 'E'].into());
//! assert_eq!(bfs('B', &graph)?, ['B', 'C', 'D', 'E'].into());
//! # Ok::<(), ugraph::Error>(())
//! ```

use std::collections::BTreeSet;

pub mod arbitrary;
pub mod error;
pub mod list_graph;
pub mod matrix_graph;
pub mod traversal;

pub use crate::arbitrary::{arb_edges, arb_edges_with_density, arb_list_graph, arb_matrix_graph};
pub use crate::error::{Error, Result};
pub use crate::list_graph::ListGraph;
pub use crate::matrix_graph::MatrixGraph;
pub use crate::traversal::{bfs, dfs};

/// The contract every vertex type must satisfy: value equality, a total
/// order, and cloneability.
///
/// The order feeds the `BTreeSet`/`BTreeMap` containers backing
/// [`ListGraph`] and makes every returned vertex collection
/// deterministically ordered. Cloneability is needed because queries hand
/// out owned copies of vertices rather than references into the graph.
///
/// Blanket-implemented for every type with the right bounds; there is
/// never a reason to implement it by hand.
pub trait VertexKey: Ord + Clone {}

impl<T: Ord + Clone> VertexKey for T {}

/// The capability contract shared by both graph representations.
///
/// Everything else in this crate, the traversals in particular, depends
/// only on this trait and never on a concrete representation. The trait is
/// object-safe, so `&dyn UnweightedGraph<V>` works where the
/// representation is picked at runtime.
pub trait UnweightedGraph<V: VertexKey> {
    /// Registers a directed edge from `from` to `to`. An endpoint that has
    /// not been seen before is inserted as a new vertex first. On a graph
    /// constructed as undirected, the reverse edge is recorded within the
    /// same call.
    ///
    /// Registering an edge that is already present changes nothing.
    ///
    /// Fails with [`Error::CapacityExceeded`] when a [`MatrixGraph`] has no
    /// free slot for a new endpoint; a failed call leaves the graph exactly
    /// as it was. [`ListGraph`] never fails.
    fn add_edge(&mut self, from: V, to: V) -> Result<()>;

    /// Whether `v` has been inserted, independent of any edges it may have.
    fn contains_vertex(&self, v: &V) -> bool;

    /// All inserted vertices: insertion order for [`MatrixGraph`],
    /// ascending order for [`ListGraph`].
    fn get_vertices(&self) -> Vec<V>;

    /// The out-neighbours of `v`, as an owned set in ascending order.
    ///
    /// A vertex that was inserted but has no outgoing edges yields the
    /// empty set. Fails with [`Error::VertexNotFound`] when `v` was never
    /// inserted at all.
    fn get_connections_from(&self, v: &V) -> Result<BTreeSet<V>>;
}
