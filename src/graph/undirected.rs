use crate::algorithm::{unreachable_weight, ShortestPathAlgorithm, ShortestPathResult};
use crate::algorithm::path_search::PathSearch;
use crate::graph::traits::{EdgeWeight, Graph, MutableGraph};
use crate::Result;
use log::debug;
use std::collections::BTreeMap;

/// Stable index of a vertex slot in the graph's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Raw slot index
    pub fn index(self) -> usize {
        self.0
    }
}

/// One directed half of an undirected edge, stored by the vertex it leaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    /// Arena slot of the neighbor this entry points at
    pub to: VertexId,
    pub weight: W,
}

/// A keyed vertex owning its adjacency map (neighbor key -> edge)
#[derive(Debug, Clone)]
pub struct Vertex<W> {
    key: String,
    edges: BTreeMap<String, Edge<W>>,
}

impl<W> Vertex<W> {
    fn new(key: &str) -> Self {
        Vertex {
            key: key.to_string(),
            edges: BTreeMap::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Adjacency map of this vertex
    pub fn edges(&self) -> &BTreeMap<String, Edge<W>> {
        &self.edges
    }
}

/// An undirected weighted graph stored as a vertex arena.
///
/// Vertices live by value in `slots`; `index` maps keys to slots and `free` recycles
/// slots of removed vertices. Every edge is held as two symmetric entries with the
/// same weight, and no entry outlives the vertex it points at.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W> {
    slots: Vec<Option<Vertex<W>>>,
    index: BTreeMap<String, VertexId>,
    free: Vec<VertexId>,
}

impl<W> Default for UndirectedGraph<W> {
    fn default() -> Self {
        UndirectedGraph {
            slots: Vec::new(),
            index: BTreeMap::new(),
            free: Vec::new(),
        }
    }
}

impl<W> UndirectedGraph<W>
where
    W: EdgeWeight,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertices` slots
    pub fn with_capacity(vertices: usize) -> Self {
        UndirectedGraph {
            slots: Vec::with_capacity(vertices),
            index: BTreeMap::new(),
            free: Vec::new(),
        }
    }

    /// Builds a graph from `(a, b, weight)` triples, adding any vertex mentioned
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, W)>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.add_vertex(a);
            graph.add_vertex(b);
            graph.add_edge(a, b, weight);
        }
        graph
    }

    /// Looks up the arena slot of a vertex
    pub fn vertex_id(&self, key: &str) -> Option<VertexId> {
        self.index.get(key).copied()
    }

    /// Returns the vertex stored under `key`
    pub fn vertex(&self, key: &str) -> Option<&Vertex<W>> {
        self.vertex_id(key).and_then(|id| self.slot(id))
    }

    fn slot(&self, id: VertexId) -> Option<&Vertex<W>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, id: VertexId) -> Option<&mut Vertex<W>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Shortest path between two vertices as `(weight, keys)`.
    ///
    /// Returns `(unreachable_weight(), vec![])` when either vertex is absent or no path
    /// exists. Use [`UndirectedGraph::try_shortest_path`] to tell those cases apart.
    pub fn shortest_path(&self, start: &str, end: &str) -> (W, Vec<String>) {
        match self.try_shortest_path(start, end) {
            Ok(result) => (result.weight, result.path),
            Err(_) => (unreachable_weight(), Vec::new()),
        }
    }

    /// Shortest path between two vertices using the default path-centric search
    pub fn try_shortest_path(&self, start: &str, end: &str) -> Result<ShortestPathResult<W>> {
        PathSearch::default().find_path(self, start, end)
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: EdgeWeight,
{
    fn vertex_count(&self) -> usize {
        self.index.len()
    }

    fn edge_count(&self) -> usize {
        let entries: usize = self.slots.iter().flatten().map(|v| v.edges.len()).sum();
        entries / 2
    }

    fn has_vertex(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    fn vertex_key(&self, key: &str) -> Option<&str> {
        self.vertex(key).map(Vertex::key)
    }

    fn vertex_keys(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.index.keys().map(String::as_str))
    }

    fn neighbors(&self, key: &str) -> Box<dyn Iterator<Item = (&str, W)> + '_> {
        if let Some(vertex) = self.vertex(key) {
            Box::new(vertex.edges.iter().map(|(k, e)| (k.as_str(), e.weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edge_weight(&self, a: &str, b: &str) -> Option<W> {
        self.vertex(a)
            .and_then(|v| v.edges.get(b))
            .map(|edge| edge.weight)
    }

    fn degree(&self, key: &str) -> usize {
        self.vertex(key).map_or(0, |v| v.edges.len())
    }
}

impl<W> MutableGraph<W> for UndirectedGraph<W>
where
    W: EdgeWeight,
{
    fn add_vertex(&mut self, key: &str) -> bool {
        if self.has_vertex(key) {
            return false;
        }

        let vertex = Vertex::new(key);
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(vertex);
                id
            }
            None => {
                self.slots.push(Some(vertex));
                VertexId(self.slots.len() - 1)
            }
        };
        self.index.insert(key.to_string(), id);
        true
    }

    fn remove_vertex(&mut self, key: &str) -> bool {
        let Some(id) = self.index.remove(key) else {
            return false;
        };
        let Some(vertex) = self.slots[id.0].take() else {
            return false;
        };

        // Strip the back-references before the slot can be reused
        for edge in vertex.edges.values() {
            if let Some(neighbor) = self.slot_mut(edge.to) {
                neighbor.edges.remove(key);
            }
        }
        debug!(
            "Removed vertex {} and {} incident edges",
            key,
            vertex.edges.len()
        );

        self.free.push(id);
        true
    }

    fn add_edge(&mut self, a: &str, b: &str, weight: W) -> bool {
        let (Some(ia), Some(ib)) = (self.vertex_id(a), self.vertex_id(b)) else {
            return false;
        };
        if ia == ib {
            return false;
        }

        if let Some(va) = self.slot_mut(ia) {
            va.edges.insert(b.to_string(), Edge { to: ib, weight });
        }
        if let Some(vb) = self.slot_mut(ib) {
            vb.edges.insert(a.to_string(), Edge { to: ia, weight });
        }
        true
    }

    fn remove_edge(&mut self, a: &str, b: &str) -> bool {
        let (Some(ia), Some(ib)) = (self.vertex_id(a), self.vertex_id(b)) else {
            return false;
        };

        let removed = self
            .slot_mut(ia)
            .map_or(false, |va| va.edges.remove(b).is_some());
        if let Some(vb) = self.slot_mut(ib) {
            vb.edges.remove(a);
        }
        removed
    }

    fn update_edge_weight(&mut self, a: &str, b: &str, weight: W) -> bool {
        if !self.has_edge(a, b) {
            return false;
        }
        self.add_edge(a, b, weight)
    }
}
