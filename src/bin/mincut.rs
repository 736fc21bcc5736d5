use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

use global_mincut::cuts::minimum_cut;
use global_mincut::io::read_graph;

/// Compute the global minimum cut of a weighted undirected graph read in
/// the `N M` / `u v w` text format. Prints the cut value followed by the
/// vertices of one side of the partition.
#[derive(Parser)]
#[command(name = "mincut", version)]
struct Args {
    /// Input graph file; reads stdin when omitted
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let graph = match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            read_graph(BufReader::new(file))
                .with_context(|| format!("cannot parse {}", path.display()))?
        }
        None => read_graph(io::stdin().lock()).context("cannot parse stdin")?,
    };

    let cut = minimum_cut(&graph)?;
    println!("{}", cut.value);
    println!("{}", cut.side.iter().join(" "));
    Ok(())
}
