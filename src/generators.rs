//! Parametric graph families. Every generator returns a graph with all edge
//! weights set to 1 so that a weight pass (`set_uniform_weights`,
//! `randomize_weights`) can be applied uniformly afterwards.

use petgraph::visit::NodeIndexable;
use rand::Rng;

use crate::WeightedGraph;

fn empty_graph(n: usize) -> WeightedGraph {
    let mut graph = WeightedGraph::with_capacity(n, 0);
    for _ in 0..n {
        graph.add_node(());
    }
    graph
}

/// Complete graph on `n` vertices.
pub fn complete_graph(n: usize) -> WeightedGraph {
    let mut graph = empty_graph(n);
    for u in 0..n {
        for v in (u + 1)..n {
            graph.add_edge(graph.from_index(u), graph.from_index(v), 1);
        }
    }
    graph
}

/// Erdos-Renyi G(n, p): every vertex pair becomes an edge independently
/// with probability `p`.
pub fn gnp_random_graph<R: Rng>(n: usize, p: f64, rng: &mut R) -> WeightedGraph {
    let mut graph = empty_graph(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(p) {
                graph.add_edge(graph.from_index(u), graph.from_index(v), 1);
            }
        }
    }
    graph
}

/// G(n, m): `m` distinct edges sampled uniformly among all vertex pairs.
/// `m` is clamped to the number of pairs available.
pub fn gnm_random_graph<R: Rng>(n: usize, m: usize, rng: &mut R) -> WeightedGraph {
    let mut graph = empty_graph(n);
    let m = m.min(n.saturating_sub(1) * n / 2);

    let mut added = 0;
    while added < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let (a, b) = (graph.from_index(u), graph.from_index(v));
        if graph.find_edge(a, b).is_none() {
            graph.add_edge(a, b, 1);
            added += 1;
        }
    }
    graph
}

/// Path 0 - 1 - ... - n-1.
pub fn path_graph(n: usize) -> WeightedGraph {
    let mut graph = empty_graph(n);
    for v in 1..n {
        graph.add_edge(graph.from_index(v - 1), graph.from_index(v), 1);
    }
    graph
}

/// Cycle on `n` vertices. Degenerates like the path for n < 3: a single
/// edge for n = 2, no edges below that.
pub fn cycle_graph(n: usize) -> WeightedGraph {
    let mut graph = path_graph(n);
    if n >= 3 {
        graph.add_edge(graph.from_index(n - 1), graph.from_index(0), 1);
    }
    graph
}

/// Star on `n` vertices with vertex 0 as the hub.
pub fn star_graph(n: usize) -> WeightedGraph {
    let mut graph = empty_graph(n);
    for v in 1..n {
        graph.add_edge(graph.from_index(0), graph.from_index(v), 1);
    }
    graph
}

/// Two-dimensional lattice of `rows` x `cols` vertices, labelled row-major.
pub fn grid_2d_graph(rows: usize, cols: usize) -> WeightedGraph {
    let mut graph = empty_graph(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            if c + 1 < cols {
                graph.add_edge(graph.from_index(v), graph.from_index(v + 1), 1);
            }
            if r + 1 < rows {
                graph.add_edge(graph.from_index(v), graph.from_index(v + cols), 1);
            }
        }
    }
    graph
}

/// Set every edge weight to `weight`.
pub fn set_uniform_weights(graph: &mut WeightedGraph, weight: u64) {
    for w in graph.edge_weights_mut() {
        *w = weight;
    }
}

/// Draw every edge weight uniformly from 1..=max.
pub fn randomize_weights<R: Rng>(graph: &mut WeightedGraph, max: u64, rng: &mut R) {
    for w in graph.edge_weights_mut() {
        *w = rng.gen_range(1..=max);
    }
}
