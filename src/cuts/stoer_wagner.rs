use std::collections::VecDeque;

use petgraph::visit::{EdgeRef, IntoEdgeReferences, NodeCount, NodeIndexable};
use tracing::debug;

use crate::cuts::Cut;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MinCutError {
    #[error("graph has {0} vertices, a cut needs at least 2")]
    TooFewVertices(usize),
}

/// Compute the global minimum cut of a weighted undirected graph with the
/// Stoer-Wagner contraction algorithm.
///
/// Runs V-1 phases over a dense adjacency table, O(V^3) time and O(V^2)
/// space. Self-loops cross no cut and are ignored; parallel edges are summed
/// while the table is built; zero-weight edges are treated as absent. A
/// disconnected graph yields a cut of value 0 whose side is the component
/// containing vertex 0. Ties in the maximum adjacency ordering go to the
/// lowest vertex index, so identical inputs produce identical cuts.
pub fn minimum_cut<G>(graph: G) -> Result<Cut, MinCutError>
where
    G: NodeCount + NodeIndexable + IntoEdgeReferences,
    G::EdgeWeight: Copy + Into<u64>,
{
    let n = graph.node_count();
    if n < 2 {
        return Err(MinCutError::TooFewVertices(n));
    }

    let mut weights = vec![vec![0u64; n]; n];
    for edge in graph.edge_references() {
        let u = NodeIndexable::to_index(&graph, edge.source());
        let v = NodeIndexable::to_index(&graph, edge.target());
        if u == v {
            continue;
        }
        let w: u64 = (*edge.weight()).into();
        weights[u][v] += w;
        weights[v][u] += w;
    }

    if let Some(component) = disconnected_component(&weights) {
        debug!(reachable = component.len(), total = n, "graph is disconnected");
        return Ok(Cut::new(0, component));
    }

    Ok(contract(weights))
}

/// Run the contraction sequence to completion and return the best
/// cut-of-the-phase observed.
fn contract(mut weights: Vec<Vec<u64>>) -> Cut {
    let n = weights.len();
    let mut members: Vec<Vec<usize>> = (0..n).map(|v| vec![v]).collect();
    let mut active: Vec<usize> = (0..n).collect();

    let mut best: Option<Cut> = None;

    while active.len() > 1 {
        let (s, t, cut_of_phase) = minimum_cut_phase(&weights, &active);
        debug!(s, t, cut_of_phase, remaining = active.len(), "cut of the phase");

        if best.as_ref().map_or(true, |b| cut_of_phase < b.value) {
            best = Some(Cut::new(cut_of_phase, members[t].clone()));
        }

        // Merge t into s: fold t's adjacency row into s's and hand over its
        // membership, then retire t from the active list.
        for &v in &active {
            if v != s && v != t {
                weights[s][v] += weights[t][v];
                weights[v][s] = weights[s][v];
            }
        }
        weights[s][t] = 0;
        weights[t][s] = 0;
        let absorbed = std::mem::take(&mut members[t]);
        members[s].extend(absorbed);
        active.retain(|&v| v != t);
    }

    best.expect("two or more vertices always run at least one phase")
}

/// One minimum-cut-phase: grow a maximum adjacency ordering over the active
/// super-vertices and return the last two vertices added together with the
/// weight of the last one to the rest of the ordering.
fn minimum_cut_phase(weights: &[Vec<u64>], active: &[usize]) -> (usize, usize, u64) {
    let mut in_a = vec![false; weights.len()];
    let mut weight_to_a = vec![0u64; weights.len()];

    let mut s = active[0];
    let mut t = active[0];

    for _ in 0..active.len() {
        // Arg-max scan; the scan is ascending and the comparison strict, so
        // ties go to the lowest active index.
        let mut next = None;
        for &v in active {
            if !in_a[v] && next.map_or(true, |u: usize| weight_to_a[v] > weight_to_a[u]) {
                next = Some(v);
            }
        }
        let next = next.expect("an active vertex outside A remains");

        in_a[next] = true;
        s = t;
        t = next;

        for &v in active {
            if !in_a[v] {
                weight_to_a[v] += weights[next][v];
            }
        }
    }

    // weight_to_a[t] was frozen when t entered A, so it still holds the
    // weight of t's edges to every other vertex of the ordering.
    (s, t, weight_to_a[t])
}

/// BFS over strictly positive adjacency entries from vertex 0. Returns the
/// reached component when it does not cover the whole graph.
fn disconnected_component(weights: &[Vec<u64>]) -> Option<Vec<usize>> {
    let n = weights.len();
    let mut visited = vec![false; n];
    let mut reached = vec![0usize];
    let mut queue = VecDeque::new();

    visited[0] = true;
    queue.push_back(0);
    while let Some(u) = queue.pop_front() {
        for v in 0..n {
            if weights[u][v] > 0 && !visited[v] {
                visited[v] = true;
                reached.push(v);
                queue.push_back(v);
            }
        }
    }

    if reached.len() == n {
        None
    } else {
        reached.sort_unstable();
        Some(reached)
    }
}
