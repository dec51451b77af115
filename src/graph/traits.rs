use num_traits::{PrimInt, Unsigned};
use std::fmt::Debug;

/// Numeric type usable as an edge weight.
///
/// Weights are unsigned integers, which rules out negative edges at the type level.
pub trait EdgeWeight: PrimInt + Unsigned + Debug {}

impl<T> EdgeWeight for T where T: PrimInt + Unsigned + Debug {}

/// Trait representing a weighted undirected graph keyed by strings
pub trait Graph<W>: Debug
where
    W: EdgeWeight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, key: &str) -> bool;

    /// Returns the graph-owned copy of `key`, if the vertex exists
    fn vertex_key(&self, key: &str) -> Option<&str>;

    /// Returns an iterator over all vertex keys in ascending order
    fn vertex_keys(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Returns an iterator over `(neighbor, weight)` pairs of a vertex in ascending key order.
    /// Absent vertices have no neighbors.
    fn neighbors(&self, key: &str) -> Box<dyn Iterator<Item = (&str, W)> + '_>;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, a: &str, b: &str) -> Option<W>;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_weight(a, b).is_some()
    }

    /// Number of edges incident to a vertex
    fn degree(&self, key: &str) -> usize {
        self.neighbors(key).count()
    }
}

/// Trait for mutable graph operations.
///
/// Every mutation returns `true` when the graph changed and `false` when the call was a
/// no-op (missing vertex, missing edge, duplicate vertex).
pub trait MutableGraph<W>: Graph<W>
where
    W: EdgeWeight,
{
    /// Adds a vertex unless the key is already taken
    fn add_vertex(&mut self, key: &str) -> bool;

    /// Removes a vertex and every edge entry that references it
    fn remove_vertex(&mut self, key: &str) -> bool;

    /// Adds or overwrites the undirected edge between two existing vertices
    fn add_edge(&mut self, a: &str, b: &str, weight: W) -> bool;

    /// Removes the undirected edge between two vertices
    fn remove_edge(&mut self, a: &str, b: &str) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, a: &str, b: &str, weight: W) -> bool;
}
