use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::{self, Debug};

use crate::data_structures::{Comparator, PathSequence};
use crate::graph::{EdgeWeight, Graph};

/// How a [`Path`] answers "is this vertex already on the path?"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleCheck {
    /// Scan the vertex sequence, O(length) per query
    #[default]
    LinearScan,
    /// Keep a companion hash set, O(1) per query but copied with every path
    IndexedSet,
}

/// A candidate walk from a fixed start vertex.
///
/// The path borrows the graph it walks. Vertex keys are the graph's own strings, so
/// cloning a path copies its sequence of references, never the keys or edges.
/// The only mutation is [`Path::extend`]; searches clone a path before extending it
/// so branches sharing a prefix stay independent.
pub struct Path<'g, W, G: ?Sized> {
    graph: &'g G,
    start: &'g str,
    sequence: PathSequence<&'g str>,
    visited: Option<HashSet<&'g str>>,
    weight: W,
}

impl<'g, W, G> Path<'g, W, G>
where
    W: EdgeWeight,
    G: Graph<W> + ?Sized,
{
    /// Creates the single-vertex path `[start]` with weight zero
    pub fn new(graph: &'g G, start: &'g str, cycle_check: CycleCheck) -> Self {
        let visited = match cycle_check {
            CycleCheck::LinearScan => None,
            CycleCheck::IndexedSet => Some(HashSet::from([start])),
        };
        Path {
            graph,
            start,
            sequence: PathSequence::singleton(start),
            visited,
            weight: W::zero(),
        }
    }

    /// Appends `next` if an edge joins it to the terminus and it is not on the path yet.
    ///
    /// Invalid extensions leave the path untouched and return `false`. An edge whose
    /// weight would overflow the accumulated total also counts as invalid.
    pub fn extend(&mut self, next: &'g str) -> bool {
        if self.contains_vertex(next) {
            return false;
        }
        let Some(edge_weight) = self.graph.edge_weight(self.terminus(), next) else {
            return false;
        };
        let Some(weight) = self.weight.checked_add(&edge_weight) else {
            return false;
        };

        self.sequence.push_back(next);
        if let Some(visited) = self.visited.as_mut() {
            visited.insert(next);
        }
        self.weight = weight;
        true
    }

    /// Last vertex of the path
    pub fn terminus(&self) -> &'g str {
        self.sequence.back().copied().unwrap_or(self.start)
    }

    pub fn start(&self) -> &'g str {
        self.start
    }

    pub fn contains_vertex(&self, key: &str) -> bool {
        match &self.visited {
            Some(visited) => visited.contains(key),
            None => self.sequence.iter().any(|visited| *visited == key),
        }
    }

    /// Accumulated weight of the traversed edges
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Number of vertices on the path
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn cycle_check(&self) -> CycleCheck {
        if self.visited.is_some() {
            CycleCheck::IndexedSet
        } else {
            CycleCheck::LinearScan
        }
    }

    /// Edges leaving the terminus as `(neighbor, weight)`
    pub fn edges_from_terminus(&self) -> Box<dyn Iterator<Item = (&'g str, W)> + 'g> {
        self.graph.neighbors(self.terminus())
    }

    /// Owned vertex keys from start to terminus
    pub fn keys(&self) -> Vec<String> {
        self.sequence.iter().map(|key| key.to_string()).collect()
    }
}

impl<'g, W: Copy, G: ?Sized> Clone for Path<'g, W, G> {
    fn clone(&self) -> Self {
        Path {
            graph: self.graph,
            start: self.start,
            sequence: self.sequence.clone(),
            visited: self.visited.clone(),
            weight: self.weight,
        }
    }
}

impl<'g, W: Debug, G: ?Sized> Debug for Path<'g, W, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("sequence", &self.sequence)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Orders paths by accumulated weight.
///
/// Ascending order makes a [`PriorityQueue`](crate::data_structures::PriorityQueue) of
/// paths a min-heap; descending turns it into a max-heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathComparer {
    ascending: bool,
}

impl PathComparer {
    pub fn ascending() -> Self {
        PathComparer { ascending: true }
    }

    pub fn descending() -> Self {
        PathComparer { ascending: false }
    }
}

impl Default for PathComparer {
    fn default() -> Self {
        Self::ascending()
    }
}

impl<'g, W, G> Comparator<Path<'g, W, G>> for PathComparer
where
    W: EdgeWeight,
    G: ?Sized,
{
    fn compare(&self, a: &Path<'g, W, G>, b: &Path<'g, W, G>) -> Ordering {
        if self.ascending {
            a.weight.cmp(&b.weight)
        } else {
            b.weight.cmp(&a.weight)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::PriorityQueue;
    use crate::graph::UndirectedGraph;

    fn square() -> UndirectedGraph<u64> {
        // a - b - c - d - a
        UndirectedGraph::from_edges([("a", "b", 1), ("b", "c", 2), ("c", "d", 3), ("d", "a", 4)])
    }

    fn key<'g>(g: &'g UndirectedGraph<u64>, k: &str) -> &'g str {
        g.vertex_key(k).unwrap()
    }

    #[test]
    fn test_singleton_path() {
        let g = square();
        let path = Path::new(&g, key(&g, "a"), CycleCheck::LinearScan);
        assert_eq!(path.weight(), 0);
        assert_eq!(path.len(), 1);
        assert_eq!(path.terminus(), "a");
        assert_eq!(path.start(), "a");
        assert_eq!(path.keys(), vec!["a".to_string()]);
    }

    #[test]
    fn test_extend_accumulates_weight() {
        let g = square();
        let mut path = Path::new(&g, key(&g, "a"), CycleCheck::LinearScan);
        assert!(path.extend(key(&g, "b")));
        assert!(path.extend(key(&g, "c")));
        assert_eq!(path.weight(), 3);
        assert_eq!(path.terminus(), "c");
        assert!(path.contains_vertex("b"));
        assert!(!path.contains_vertex("d"));
    }

    #[test]
    fn test_invalid_extensions_are_no_ops() {
        for check in [CycleCheck::LinearScan, CycleCheck::IndexedSet] {
            let g = square();
            let mut path = Path::new(&g, key(&g, "a"), check);
            // No edge a-c
            assert!(!path.extend(key(&g, "c")));
            assert!(path.extend(key(&g, "b")));
            // Already visited
            assert!(!path.extend(key(&g, "a")));
            assert_eq!(path.keys(), vec!["a".to_string(), "b".to_string()]);
            assert_eq!(path.weight(), 1);
            assert_eq!(path.cycle_check(), check);
        }
    }

    #[test]
    fn test_overflowing_extension_is_rejected() {
        let g: UndirectedGraph<u8> = UndirectedGraph::from_edges([("a", "b", 200), ("b", "c", 100)]);
        let mut path = Path::new(&g, g.vertex_key("a").unwrap(), CycleCheck::LinearScan);
        assert!(path.extend(g.vertex_key("b").unwrap()));
        assert!(!path.extend(g.vertex_key("c").unwrap()));
        assert_eq!(path.weight(), 200);
        assert_eq!(path.terminus(), "b");
    }

    #[test]
    fn test_clone_does_not_share_sequence() {
        let g = square();
        let mut left = Path::new(&g, key(&g, "a"), CycleCheck::IndexedSet);
        let mut right = left.clone();
        assert!(left.extend(key(&g, "b")));
        assert!(right.extend(key(&g, "d")));
        assert_eq!(left.keys(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(right.keys(), vec!["a".to_string(), "d".to_string()]);
        assert!(!left.contains_vertex("d"));
        assert!(!right.contains_vertex("b"));
    }

    #[test]
    fn test_edges_from_terminus() {
        let g = square();
        let mut path = Path::new(&g, key(&g, "a"), CycleCheck::LinearScan);
        path.extend(key(&g, "b"));
        let edges: Vec<_> = path.edges_from_terminus().collect();
        assert_eq!(edges, vec![("a", 1), ("c", 2)]);
    }

    #[test]
    fn test_comparer_directions() {
        let g = square();
        let a = key(&g, "a");
        let short = Path::new(&g, a, CycleCheck::LinearScan);
        let mut long = short.clone();
        long.extend(key(&g, "d"));

        let mut min_queue = PriorityQueue::new(PathComparer::ascending());
        min_queue.insert(long.clone());
        min_queue.insert(short.clone());
        assert_eq!(min_queue.peek_min().map(Path::weight), Some(0));

        let mut max_queue = PriorityQueue::new(PathComparer::descending());
        max_queue.insert(short);
        max_queue.insert(long);
        assert_eq!(max_queue.peek_min().map(Path::weight), Some(4));
    }
}
