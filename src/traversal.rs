//! Representation-agnostic reachability traversals.
//!
//! Both functions work through the [`UnweightedGraph`] contract alone and
//! therefore behave identically over either representation, and over
//! `&dyn UnweightedGraph<V>` trait objects. They differ only in frontier
//! discipline: a stack for [`dfs`], a queue for [`bfs`].
//!
//! Neighbours enter the frontier in the ascending order yielded by
//! [`UnweightedGraph::get_connections_from`], without filtering out
//! vertices already seen; a vertex may therefore sit in the frontier more
//! than once and revisits are discarded when popped. This only affects
//! transient frontier size, never the returned set. Each traversal runs
//! in O(V + E) over the reachable subgraph.

use std::collections::{BTreeSet, VecDeque};

use crate::error::Result;
use crate::{UnweightedGraph, VertexKey};

/// Visits every vertex reachable from `origin`, expanding the most
/// recently discovered vertex first (depth-first), and returns the
/// reachable set, `origin` included.
///
/// Fails with [`Error::VertexNotFound`](crate::Error::VertexNotFound)
/// when `origin` was never inserted into `graph`.
pub fn dfs<V, G>(origin: V, graph: &G) -> Result<BTreeSet<V>>
where
    V: VertexKey,
    G: UnweightedGraph<V> + ?Sized,
{
    let mut visited = BTreeSet::new();
    let mut pending = vec![origin];
    while let Some(v) = pending.pop() {
        if visited.contains(&v) {
            continue;
        }
        pending.extend(graph.get_connections_from(&v)?);
        visited.insert(v);
    }
    Ok(visited)
}

/// Visits every vertex reachable from `origin` in level order
/// (breadth-first) and returns the reachable set, `origin` included.
///
/// Fails with [`Error::VertexNotFound`](crate::Error::VertexNotFound)
/// when `origin` was never inserted into `graph`.
pub fn bfs<V, G>(origin: V, graph: &G) -> Result<BTreeSet<V>>
where
    V: VertexKey,
    G: UnweightedGraph<V> + ?Sized,
{
    let mut visited = BTreeSet::new();
    let mut pending: VecDeque<V> = vec![origin].into();
    while let Some(v) = pending.pop_front() {
        if visited.contains(&v) {
            continue;
        }
        pending.extend(graph.get_connections_from(&v)?);
        visited.insert(v);
    }
    Ok(visited)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::arbitrary::arb_edges_with_density;
    use crate::error::Error;
    use crate::list_graph::ListGraph;
    use crate::matrix_graph::MatrixGraph;

    const SAMPLE_EDGES: [(char, char); 6] = [
        ('A', 'B'),
        ('B', 'C'),
        ('B', 'D'),
        ('C', 'E'),
        ('D', 'C'),
        ('E', 'D'),
    ];

    fn sample_matrix() -> MatrixGraph<char> {
        let mut graph = MatrixGraph::directed(5).unwrap();
        for (u, v) in SAMPLE_EDGES {
            graph.add_edge(u, v).unwrap();
        }
        graph
    }

    fn sample_list() -> ListGraph<char> {
        let mut graph = ListGraph::directed();
        for (u, v) in SAMPLE_EDGES {
            graph.add_edge(u, v).unwrap();
        }
        graph
    }

    #[test]
    fn dfs_collects_the_reachable_closure() {
        let expected = BTreeSet::from(['B', 'C', 'D', 'E']);
        assert_eq!(dfs('B', &sample_matrix()).unwrap(), expected);
        assert_eq!(dfs('B', &sample_list()).unwrap(), expected);
    }

    #[test]
    fn bfs_collects_the_reachable_closure() {
        let expected = BTreeSet::from(['B', 'C', 'D', 'E']);
        assert_eq!(bfs('B', &sample_matrix()).unwrap(), expected);
        assert_eq!(bfs('B', &sample_list()).unwrap(), expected);
    }

    #[test]
    fn vertices_behind_the_origin_stay_out() {
        // A points at B but nothing points back at A.
        assert!(!dfs('B', &sample_matrix()).unwrap().contains(&'A'));
        assert!(!bfs('B', &sample_list()).unwrap().contains(&'A'));
    }

    #[test]
    fn everything_is_reachable_from_the_root() {
        let expected = BTreeSet::from(['A', 'B', 'C', 'D', 'E']);
        assert_eq!(dfs('A', &sample_matrix()).unwrap(), expected);
        assert_eq!(bfs('A', &sample_list()).unwrap(), expected);
    }

    #[test]
    fn origin_without_outgoing_edges_traverses_to_itself() {
        let mut matrix = MatrixGraph::directed(2).unwrap();
        matrix.add_edge('x', 'y').unwrap();
        assert_eq!(dfs('y', &matrix).unwrap(), BTreeSet::from(['y']));
        assert_eq!(bfs('y', &matrix).unwrap(), BTreeSet::from(['y']));

        let mut list = ListGraph::directed();
        list.add_edge('x', 'y').unwrap();
        assert_eq!(dfs('y', &list).unwrap(), BTreeSet::from(['y']));
        assert_eq!(bfs('y', &list).unwrap(), BTreeSet::from(['y']));
    }

    #[test]
    fn unknown_origin_fails() {
        assert_eq!(dfs('Z', &sample_matrix()).unwrap_err(), Error::VertexNotFound);
        assert_eq!(bfs('Z', &sample_list()).unwrap_err(), Error::VertexNotFound);
    }

    #[test]
    fn traversal_works_through_a_trait_object() {
        let matrix = sample_matrix();
        let graph: &dyn UnweightedGraph<char> = &matrix;
        assert_eq!(
            dfs('B', graph).unwrap(),
            BTreeSet::from(['B', 'C', 'D', 'E'])
        );
        assert_eq!(
            bfs('B', graph).unwrap(),
            BTreeSet::from(['B', 'C', 'D', 'E'])
        );
    }

    #[test]
    fn undirected_traversal_walks_edges_backwards() {
        let mut graph = ListGraph::undirected();
        graph.add_edge('a', 'b').unwrap();
        graph.add_edge('b', 'c').unwrap();
        assert_eq!(dfs('c', &graph).unwrap(), BTreeSet::from(['a', 'b', 'c']));
        assert_eq!(bfs('c', &graph).unwrap(), BTreeSet::from(['a', 'b', 'c']));
    }

    proptest! {
        #[test]
        fn representations_agree_on_connections_and_traversals(
            edges in arb_edges_with_density(8, 0.3),
        ) {
            let mut matrix = MatrixGraph::directed(8).unwrap();
            let mut list = ListGraph::directed();
            for (u, v) in &edges {
                matrix.add_edge(*u, *v).unwrap();
                list.add_edge(*u, *v).unwrap();
            }

            let matrix_vertices: BTreeSet<u8> = matrix.get_vertices().into_iter().collect();
            let list_vertices: BTreeSet<u8> = list.get_vertices().into_iter().collect();
            prop_assert_eq!(&matrix_vertices, &list_vertices);

            for v in matrix.get_vertices() {
                prop_assert_eq!(
                    matrix.get_connections_from(&v).unwrap(),
                    list.get_connections_from(&v).unwrap()
                );
                prop_assert_eq!(dfs(v, &matrix).unwrap(), dfs(v, &list).unwrap());
                prop_assert_eq!(bfs(v, &matrix).unwrap(), bfs(v, &list).unwrap());
            }
        }

        #[test]
        fn dfs_and_bfs_agree_on_the_reachable_set(
            edges in arb_edges_with_density(8, 0.3),
        ) {
            let mut graph = ListGraph::directed();
            for (u, v) in edges {
                graph.add_edge(u, v).unwrap();
            }
            for v in graph.get_vertices() {
                prop_assert_eq!(dfs(v, &graph).unwrap(), bfs(v, &graph).unwrap());
            }
        }
    }
}
