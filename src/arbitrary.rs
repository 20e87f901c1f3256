//! Proptest strategies for random edge lists and graphs.
//!
//! These back this crate's own property tests and are exported so that
//! downstream code can generate graphs in its tests too. Vertices are
//! small `u8` labels drawn from `0..vertex_count`.

// Must match the rand generation behind TestRng, so take proptest's re-export.
use proptest::prelude::Rng;
use proptest::prelude::*;

use crate::list_graph::ListGraph;
use crate::matrix_graph::MatrixGraph;
use crate::UnweightedGraph;

/// Edge lists over vertex labels `0..vertex_count`, at most `max_edges`
/// long. Self-pairs `(u, u)` may occur.
///
/// Requires `vertex_count >= 1`.  Panics otherwise.
pub fn arb_edges(vertex_count: u8, max_edges: usize) -> BoxedStrategy<Vec<(u8, u8)>> {
    assert!(vertex_count >= 1);
    proptest::collection::vec((0..vertex_count, 0..vertex_count), 0..=max_edges).boxed()
}

/// Edge sets where each ordered pair `(u, v)` with `u != v` over
/// `0..vertex_count` is included independently with probability
/// `density`. Never produces self-pairs, so the resulting edge set builds
/// identically observable graphs in both representations.
///
/// Requires `vertex_count >= 1` and `density` within `[0, 1]`.  Panics
/// otherwise.
pub fn arb_edges_with_density(vertex_count: u8, density: f64) -> BoxedStrategy<Vec<(u8, u8)>> {
    assert!(vertex_count >= 1);
    assert!((0.0..=1.0).contains(&density));
    Just(())
        .prop_perturb(move |(), mut rng| {
            let mut edges = Vec::new();
            for u in 0..vertex_count {
                for v in 0..vertex_count {
                    if u != v && rng.random_bool(density) {
                        edges.push((u, v));
                    }
                }
            }
            edges
        })
        .boxed()
}

/// Directed [`ListGraph`]s built from [`arb_edges`].
pub fn arb_list_graph(vertex_count: u8, max_edges: usize) -> BoxedStrategy<ListGraph<u8>> {
    arb_edges(vertex_count, max_edges)
        .prop_map(|edges| {
            let mut graph = ListGraph::directed();
            for (u, v) in edges {
                graph.add_edge(u, v).unwrap();
            }
            graph
        })
        .boxed()
}

/// Directed [`MatrixGraph`]s built from [`arb_edges`], with capacity for
/// the whole label universe so that building can never hit the capacity
/// limit.
pub fn arb_matrix_graph(vertex_count: u8, max_edges: usize) -> BoxedStrategy<MatrixGraph<u8>> {
    arb_edges(vertex_count, max_edges)
        .prop_map(move |edges| {
            let mut graph = MatrixGraph::directed(usize::from(vertex_count)).unwrap();
            for (u, v) in edges {
                graph.add_edge(u, v).unwrap();
            }
            graph
        })
        .boxed()
}
