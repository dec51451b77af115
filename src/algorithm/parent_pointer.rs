use log::debug;
use std::collections::HashMap;

use crate::algorithm::{SearchStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{PathSequence, PriorityQueue};
use crate::graph::{EdgeWeight, Graph};
use crate::{Error, Result};

/// Classic Dijkstra with per-node relaxation and a predecessor map.
///
/// Frontier entries are `(distance, vertex)` pairs instead of whole paths, and the path
/// is rebuilt from predecessors once the target is settled. Weights always agree with
/// [`PathSearch`](crate::algorithm::path_search::PathSearch); memory stays O(V).
#[derive(Debug, Default)]
pub struct ParentPointerSearch;

impl ParentPointerSearch {
    /// Creates a new parent-pointer search instance
    pub fn new() -> Self {
        ParentPointerSearch
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for ParentPointerSearch
where
    W: EdgeWeight,
    G: Graph<W> + ?Sized,
{
    fn name(&self) -> &'static str {
        "Parent-pointer Dijkstra"
    }

    fn find_path(&self, graph: &G, start: &str, end: &str) -> Result<ShortestPathResult<W>> {
        let source = graph
            .vertex_key(start)
            .ok_or_else(|| Error::VertexNotFound(start.to_string()))?;
        let target = graph
            .vertex_key(end)
            .ok_or_else(|| Error::VertexNotFound(end.to_string()))?;

        let mut distances: HashMap<&str, W> = HashMap::with_capacity(graph.vertex_count());
        let mut predecessors: HashMap<&str, &str> = HashMap::new();
        distances.insert(source, W::zero());

        let mut queue = PriorityQueue::new(|a: &(W, &str), b: &(W, &str)| a.0.cmp(&b.0));
        queue.insert((W::zero(), source));
        let mut stats = SearchStats {
            pushed: 1,
            peak_frontier: 1,
            ..SearchStats::default()
        };

        while let Some((dist_u, u)) = queue.remove_min() {
            // A shorter distance to u was settled after this entry was queued
            if distances.get(u).map_or(false, |&known| known < dist_u) {
                continue;
            }

            if u == target {
                let mut path = PathSequence::singleton(target);
                let mut current = target;
                while let Some(&pred) = predecessors.get(current) {
                    path.push_front(pred);
                    current = pred;
                }
                debug!(
                    "Settled {} at {:?} after expanding {} vertices",
                    target, dist_u, stats.expanded
                );
                return Ok(ShortestPathResult {
                    weight: dist_u,
                    path: path.iter().map(|key| key.to_string()).collect(),
                    stats,
                });
            }

            stats.expanded += 1;
            for (v, weight) in graph.neighbors(u) {
                let Some(new_dist) = dist_u.checked_add(&weight) else {
                    continue;
                };

                let should_update = distances.get(v).map_or(true, |&current| new_dist < current);
                if should_update {
                    distances.insert(v, new_dist);
                    predecessors.insert(v, u);
                    queue.insert((new_dist, v));
                    stats.pushed += 1;
                    stats.peak_frontier = stats.peak_frontier.max(queue.len());
                } else {
                    stats.pruned += 1;
                }
            }
        }

        Err(Error::Unreachable {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}
