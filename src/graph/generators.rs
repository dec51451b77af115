use crate::graph::{MutableGraph, UndirectedGraph};
use rand::prelude::*;

/// Key of the grid vertex at column `x`, row `y`
pub fn grid_key(x: usize, y: usize) -> String {
    format!("{},{}", x, y)
}

/// Generates a `width` x `height` grid with 4-connectivity and unit weights.
/// Vertex keys are `"x,y"` (see [`grid_key`]).
pub fn generate_grid(width: usize, height: usize) -> UndirectedGraph<u64> {
    let mut graph = UndirectedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(&grid_key(x, y));
        }
    }

    for y in 0..height {
        for x in 0..width {
            let current = grid_key(x, y);
            if x + 1 < width {
                graph.add_edge(&current, &grid_key(x + 1, y), 1);
            }
            if y + 1 < height {
                graph.add_edge(&current, &grid_key(x, y + 1), 1);
            }
        }
    }

    graph
}

/// Generates a random graph on vertices `"0".."n-1"`.
///
/// Each unordered pair is connected with probability `edge_probability` and a weight
/// drawn from `0..=max_weight`. Pass a seeded RNG for reproducible graphs.
pub fn generate_random<R: Rng + ?Sized>(
    n: usize,
    edge_probability: f64,
    max_weight: u64,
    rng: &mut R,
) -> UndirectedGraph<u64> {
    assert!(
        (0.0..=1.0).contains(&edge_probability),
        "edge_probability must be within [0, 1]"
    );

    let mut graph = UndirectedGraph::with_capacity(n);
    for i in 0..n {
        graph.add_vertex(&i.to_string());
    }

    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(0..=max_weight);
                graph.add_edge(&i.to_string(), &j.to_string(), weight);
            }
        }
    }

    graph
}
