use thiserror::Error;

/// The error type for graph construction, mutation, and queries.
///
/// Every variant is synchronous and fatal only for the single call that
/// produced it. A failed operation never leaves a graph partially updated:
/// in particular, an `add_edge` rejected for capacity inserts no vertices.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A [`MatrixGraph`](crate::MatrixGraph) was constructed with an
    /// unusable capacity: zero, or so large that the square adjacency grid
    /// cannot be indexed by `usize`.
    #[error("matrix graph capacity must be at least 1 and fit a square bit grid")]
    InvalidCapacity,

    /// Registering an edge would require inserting a vertex beyond a
    /// [`MatrixGraph`](crate::MatrixGraph)'s fixed slot count.
    #[error("matrix graph is full: all {capacity} vertex slots are occupied")]
    CapacityExceeded {
        /// The slot count the graph was constructed with.
        capacity: usize,
    },

    /// The queried vertex was never inserted into the graph, neither
    /// explicitly nor as an endpoint of a registered edge.
    #[error("vertex is not present in the graph")]
    VertexNotFound,
}

/// Alias for `std::result::Result` with this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
