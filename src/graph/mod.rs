pub mod traits;
pub mod undirected;
pub mod generators;

pub use traits::{EdgeWeight, Graph, MutableGraph};
pub use undirected::{Edge, UndirectedGraph, Vertex, VertexId};
