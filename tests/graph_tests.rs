use path_sssp::graph::generators::generate_random;
use path_sssp::graph::{Graph, MutableGraph, UndirectedGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Every edge entry must have a matching entry with the same weight on the other side
fn assert_symmetric(graph: &UndirectedGraph<u64>) {
    let mut entries = 0;
    for key in graph.vertex_keys() {
        for (neighbor, weight) in graph.neighbors(key) {
            assert!(graph.has_vertex(neighbor), "{} points at missing {}", key, neighbor);
            assert_eq!(
                graph.edge_weight(neighbor, key),
                Some(weight),
                "{} -> {} has no matching back edge",
                key,
                neighbor
            );
            entries += 1;
        }
    }
    assert_eq!(entries, graph.edge_count() * 2);
}

#[test]
fn test_remove_vertex_leaves_no_references() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let mut graph = generate_random(10, 0.4, 9, &mut rng);
        let victim = rng.gen_range(0..10).to_string();
        let degree = graph.degree(&victim);
        let edges_before = graph.edge_count();

        assert!(graph.remove_vertex(&victim));
        assert_eq!(graph.vertex_count(), 9);
        assert_eq!(graph.edge_count(), edges_before - degree);
        for key in graph.vertex_keys() {
            assert!(graph.neighbors(key).all(|(n, _)| n != victim));
        }
        assert_symmetric(&graph);
    }
}

#[test]
fn test_random_mutations_keep_symmetry() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut graph: UndirectedGraph<u64> = UndirectedGraph::new();

    for _ in 0..500 {
        let a = rng.gen_range(0..12).to_string();
        let b = rng.gen_range(0..12).to_string();
        match rng.gen_range(0..5) {
            0 => {
                graph.add_vertex(&a);
            }
            1 => {
                graph.remove_vertex(&a);
            }
            2 | 3 => {
                let added = graph.add_edge(&a, &b, rng.gen_range(0..50));
                assert_eq!(added, a != b && graph.has_vertex(&a) && graph.has_vertex(&b));
            }
            _ => {
                graph.remove_edge(&a, &b);
                assert!(!graph.has_edge(&a, &b));
            }
        }
        assert_symmetric(&graph);
    }
}

#[test]
fn test_add_vertex_twice_keeps_edges() {
    let mut graph: UndirectedGraph<u64> = UndirectedGraph::from_edges([("k", "m", 3), ("k", "n", 4)]);
    assert!(!graph.add_vertex("k"));
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.degree("k"), 2);
    assert_eq!(graph.edge_weight("n", "k"), Some(4));
}

#[test]
fn test_mutations_on_missing_vertices_are_no_ops() {
    let mut graph: UndirectedGraph<u64> = UndirectedGraph::from_edges([("a", "b", 1)]);
    assert!(!graph.add_edge("a", "ghost", 2));
    assert!(!graph.remove_edge("ghost", "a"));
    assert!(!graph.remove_vertex("ghost"));
    assert!(!graph.update_edge_weight("ghost", "b", 9));
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_symmetric(&graph);
}

#[test]
fn test_last_write_wins() {
    let mut graph: UndirectedGraph<u64> = UndirectedGraph::from_edges([("a", "b", 1)]);
    graph.add_edge("b", "a", 8);
    graph.add_edge("a", "b", 5);
    assert_eq!(graph.edge_weight("a", "b"), Some(5));
    assert_eq!(graph.edge_weight("b", "a"), Some(5));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_readding_removed_vertex_starts_empty() {
    let mut graph: UndirectedGraph<u64> =
        UndirectedGraph::from_edges([("a", "b", 1), ("a", "c", 1), ("b", "c", 1)]);
    graph.remove_vertex("a");
    graph.add_vertex("a");
    assert_eq!(graph.degree("a"), 0);
    assert!(!graph.has_edge("b", "a"));
    assert!(graph.has_edge("b", "c"));

    let (weight, path) = graph.shortest_path("a", "b");
    assert_eq!(weight, u64::MAX);
    assert!(path.is_empty());
}
