//! Tools for experimenting with weighted undirected graphs: parametric
//! generators, a plain-text exchange format, and a global minimum cut
//! engine built on the Stoer-Wagner contraction algorithm.

pub mod cuts;
pub mod generators;
pub mod io;

/// Weighted undirected graph shared by the generators, the text format and
/// the cut engine. Edge weights are non-negative by construction.
pub type WeightedGraph = petgraph::graph::UnGraph<(), u64>;
