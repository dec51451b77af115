use serde::{Deserialize, Serialize};

use crate::graph::{EdgeWeight, Graph};
use crate::Result;

/// Counters collected while a search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Frontier entries popped and expanded
    pub expanded: usize,
    /// Frontier entries inserted, including the seed
    pub pushed: usize,
    /// Candidates discarded because they did not improve the best-known weight
    pub pruned: usize,
    /// Largest frontier size observed
    pub peak_frontier: usize,
}

/// Result of a single-pair shortest path search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathResult<W> {
    /// Sum of the edge weights along `path`
    pub weight: W,

    /// Vertex keys from start to end, both included
    pub path: Vec<String>,

    pub stats: SearchStats,
}

/// Weight reported when no path exists or an endpoint is missing
pub fn unreachable_weight<W: EdgeWeight>() -> W {
    W::max_value()
}

/// Trait for single-pair shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: EdgeWeight,
    G: Graph<W> + ?Sized,
{
    /// Find a minimum-weight path from `start` to `end`
    fn find_path(&self, graph: &G, start: &str, end: &str) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Weight of the shortest path, or [`unreachable_weight`] when there is none
    fn distance(&self, graph: &G, start: &str, end: &str) -> W {
        self.find_path(graph, start, end)
            .map_or_else(|_| unreachable_weight(), |result| result.weight)
    }
}
