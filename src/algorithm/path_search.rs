use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::algorithm::path::{CycleCheck, Path, PathComparer};
use crate::algorithm::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::PriorityQueue;
use crate::graph::{EdgeWeight, Graph};
use crate::{Error, Result};

/// Configuration for [`PathSearch`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathSearchConfig {
    /// Membership strategy of every frontier path
    pub cycle_check: CycleCheck,
    /// Maximum number of paths to expand before giving up
    pub expansion_limit: Option<usize>,
}

impl PathSearchConfig {
    pub fn with_cycle_check(mut self, cycle_check: CycleCheck) -> Self {
        self.cycle_check = cycle_check;
        self
    }

    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }
}

/// Shortest path search whose frontier holds whole paths.
///
/// The queue is seeded with the one-vertex path at the start. Each round pops the
/// lightest path; if it ends at the target it is the answer, otherwise it is expanded
/// along every edge to an unvisited neighbor. A candidate survives only if it beats the
/// best weight recorded so far for its terminus. That table only prunes; the answer
/// is always the popped path itself.
///
/// Dominated paths may linger in the queue, and a vertex can be pushed once per
/// improvement, so the search is O(E log E) queue work plus O(path length) per copy.
#[derive(Debug, Default, Clone)]
pub struct PathSearch {
    config: PathSearchConfig,
}

impl PathSearch {
    /// Creates a search with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PathSearchConfig) -> Self {
        PathSearch { config }
    }

    pub fn config(&self) -> &PathSearchConfig {
        &self.config
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for PathSearch
where
    W: EdgeWeight,
    G: Graph<W> + ?Sized,
{
    fn name(&self) -> &'static str {
        "Path-centric search"
    }

    fn find_path(&self, graph: &G, start: &str, end: &str) -> Result<ShortestPathResult<W>> {
        let start_key = graph
            .vertex_key(start)
            .ok_or_else(|| Error::VertexNotFound(start.to_string()))?;
        let end_key = graph
            .vertex_key(end)
            .ok_or_else(|| Error::VertexNotFound(end.to_string()))?;

        debug!(
            "Searching {} -> {} over {} vertices ({:?})",
            start_key,
            end_key,
            graph.vertex_count(),
            self.config.cycle_check
        );

        // Vertices missing from the table have never been reached (infinite weight)
        let mut best: HashMap<&str, W> = HashMap::with_capacity(graph.vertex_count());
        best.insert(start_key, W::zero());

        let mut queue = PriorityQueue::new(PathComparer::ascending());
        queue.insert(Path::new(graph, start_key, self.config.cycle_check));
        let mut stats = SearchStats {
            pushed: 1,
            peak_frontier: 1,
            ..SearchStats::default()
        };

        while let Some(path) = queue.remove_min() {
            if path.terminus() == end_key {
                debug!(
                    "Reached {} with weight {:?} after expanding {} paths ({} pushed, {} pruned)",
                    end_key,
                    path.weight(),
                    stats.expanded,
                    stats.pushed,
                    stats.pruned
                );
                return Ok(ShortestPathResult {
                    weight: path.weight(),
                    path: path.keys(),
                    stats,
                });
            }

            if let Some(limit) = self.config.expansion_limit {
                if stats.expanded >= limit {
                    debug!("Expansion limit {} reached with {} paths queued", limit, queue.len());
                    return Err(Error::ExpansionLimit(limit));
                }
            }
            stats.expanded += 1;
            trace!("Expanding {:?}", path);

            for (next, _) in path.edges_from_terminus() {
                if path.contains_vertex(next) {
                    continue;
                }

                let mut candidate = path.clone();
                if !candidate.extend(next) {
                    continue;
                }

                let improves = best
                    .get(next)
                    .map_or(true, |&known| candidate.weight() < known);
                if improves {
                    best.insert(next, candidate.weight());
                    queue.insert(candidate);
                    stats.pushed += 1;
                    stats.peak_frontier = stats.peak_frontier.max(queue.len());
                } else {
                    trace!("Pruned candidate ending at {} ({:?})", next, candidate.weight());
                    stats.pruned += 1;
                }
            }
        }

        debug!(
            "No path {} -> {} after expanding {} paths",
            start_key, end_key, stats.expanded
        );
        Err(Error::Unreachable {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}
