//! Plain-text graph exchange format: an `N M` header followed by `M` lines
//! of `u v w`. Lines that are blank or start with `#` are comments and may
//! appear anywhere.

use std::io::{BufRead, Write};

use petgraph::visit::{EdgeRef, NodeIndexable};

use crate::WeightedGraph;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("missing `N M` header line")]
    MissingHeader,
    #[error("line {line}: malformed header, expected `N M`")]
    InvalidHeader { line: usize },
    #[error("line {line}: malformed edge, expected `u v w`")]
    InvalidEdge { line: usize },
    #[error("line {line}: vertex {vertex} out of range for {nodes} vertices")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        nodes: usize,
    },
    #[error("line {line}: negative edge weight {weight}")]
    NegativeWeight { line: usize, weight: i64 },
    #[error("expected {expected} edge lines, found {found}")]
    MissingEdges { expected: usize, found: usize },
}

/// Read a graph from the text format. Self-loops and parallel edges are
/// accepted as-is; anything after the `M`-th edge line is ignored.
pub fn read_graph<R: BufRead>(reader: R) -> Result<WeightedGraph, ParseError> {
    let mut header: Option<(usize, usize)> = None;
    let mut graph = WeightedGraph::new_undirected();
    let mut found = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        match header {
            None => {
                let (n, m) = parse_header(content).ok_or(ParseError::InvalidHeader { line: line_no })?;
                for _ in 0..n {
                    graph.add_node(());
                }
                if m == 0 {
                    return Ok(graph);
                }
                header = Some((n, m));
            }
            Some((n, m)) => {
                let (u, v, w) = parse_edge(content, line_no, n)?;
                graph.add_edge(graph.from_index(u), graph.from_index(v), w);
                found += 1;
                if found == m {
                    return Ok(graph);
                }
            }
        }
    }

    match header {
        None => Err(ParseError::MissingHeader),
        Some((_, m)) => Err(ParseError::MissingEdges {
            expected: m,
            found,
        }),
    }
}

fn parse_header(content: &str) -> Option<(usize, usize)> {
    let mut fields = content.split_whitespace();
    let n = fields.next()?.parse().ok()?;
    let m = fields.next()?.parse().ok()?;
    match fields.next() {
        None => Some((n, m)),
        Some(_) => None,
    }
}

fn parse_edge(content: &str, line: usize, nodes: usize) -> Result<(usize, usize, u64), ParseError> {
    let mut fields = content.split_whitespace();

    let u: usize = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or(ParseError::InvalidEdge { line })?;
    let v: usize = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or(ParseError::InvalidEdge { line })?;
    let w: i64 = fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or(ParseError::InvalidEdge { line })?;
    if fields.next().is_some() {
        return Err(ParseError::InvalidEdge { line });
    }

    if w < 0 {
        return Err(ParseError::NegativeWeight { line, weight: w });
    }
    for vertex in [u, v] {
        if vertex >= nodes {
            return Err(ParseError::VertexOutOfRange {
                line,
                vertex,
                nodes,
            });
        }
    }

    Ok((u, v, w as u64))
}

/// Write a graph in the text format.
pub fn write_graph<W: Write>(graph: &WeightedGraph, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "{} {}", graph.node_count(), graph.edge_count())?;
    for edge in graph.edge_references() {
        writeln!(
            writer,
            "{} {} {}",
            edge.source().index(),
            edge.target().index(),
            edge.weight()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::generators;
    use crate::io::{read_graph, write_graph, ParseError};

    #[test]
    fn reads_a_graph_with_comments_and_blank_lines() {
        let input = "\
# generated by: generate path 3
3 2

0 1 4
# midway comment
1 2 6
";
        let graph = read_graph(input.as_bytes()).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        let weights: Vec<u64> = graph.edge_weights().copied().collect();
        assert_eq!(weights, vec![4, 6]);
    }

    #[test]
    fn reads_an_edgeless_graph() {
        let graph = read_graph("4 0\n".as_bytes()).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn accepts_self_loops_and_parallel_edges() {
        let graph = read_graph("2 3\n0 0 9\n0 1 1\n0 1 2\n".as_bytes()).unwrap();
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn rejects_missing_header() {
        assert!(matches!(
            read_graph("# only comments\n".as_bytes()),
            Err(ParseError::MissingHeader)
        ));
    }

    #[test]
    fn rejects_malformed_header() {
        assert!(matches!(
            read_graph("3\n".as_bytes()),
            Err(ParseError::InvalidHeader { line: 1 })
        ));
        assert!(matches!(
            read_graph("3 2 1\n".as_bytes()),
            Err(ParseError::InvalidHeader { line: 1 })
        ));
    }

    #[test]
    fn rejects_malformed_edges() {
        assert!(matches!(
            read_graph("2 1\n0 1\n".as_bytes()),
            Err(ParseError::InvalidEdge { line: 2 })
        ));
        assert!(matches!(
            read_graph("2 1\n0 one 3\n".as_bytes()),
            Err(ParseError::InvalidEdge { line: 2 })
        ));
    }

    #[test]
    fn rejects_negative_weights() {
        assert!(matches!(
            read_graph("2 1\n0 1 -3\n".as_bytes()),
            Err(ParseError::NegativeWeight { line: 2, weight: -3 })
        ));
    }

    #[test]
    fn rejects_out_of_range_endpoints() {
        assert!(matches!(
            read_graph("2 1\n0 5 1\n".as_bytes()),
            Err(ParseError::VertexOutOfRange {
                line: 2,
                vertex: 5,
                nodes: 2
            })
        ));
    }

    #[test]
    fn rejects_truncated_edge_lists() {
        assert!(matches!(
            read_graph("3 2\n0 1 1\n".as_bytes()),
            Err(ParseError::MissingEdges {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn writes_the_header_and_one_line_per_edge() {
        let graph = generators::path_graph(3);
        let mut out = Vec::new();
        write_graph(&graph, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3 2\n0 1 1\n1 2 1\n");
    }

    #[test]
    fn written_graphs_read_back() {
        let mut graph = generators::grid_2d_graph(2, 3);
        generators::set_uniform_weights(&mut graph, 8);
        let mut buffer = Vec::new();
        write_graph(&graph, &mut buffer).unwrap();

        let parsed = read_graph(buffer.as_slice()).unwrap();
        assert_eq!(parsed.node_count(), graph.node_count());
        assert_eq!(parsed.edge_count(), graph.edge_count());
    }
}
