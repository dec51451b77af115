//! Path SSSP - path-centric shortest path search
//!
//! This library finds the minimum-weight path between two vertices of a weighted
//! undirected graph. The search frontier holds whole candidate paths rather than
//! per-node tentative distances: every frontier entry carries its vertex sequence,
//! its accumulated weight and enough bookkeeping to refuse cycles.
//!
//! The graph and all searches are single-threaded. A graph must not be mutated
//! while a search borrows it, which the borrow checker enforces.
//!
//! Correctness claims hold for non-negative weights only; the weight types are
//! unsigned integers, so negative weights cannot be expressed.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    parent_pointer::ParentPointerSearch,
    path::{CycleCheck, Path, PathComparer},
    path_search::{PathSearch, PathSearchConfig},
    unreachable_weight, SearchStats, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("No path from {start} to {end}")]
    Unreachable { start: String, end: String },

    #[error("Search expanded more than {0} paths")]
    ExpansionLimit(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
