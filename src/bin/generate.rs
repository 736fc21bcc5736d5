use std::env;
use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use global_mincut::generators;
use global_mincut::io::write_graph;
use global_mincut::WeightedGraph;

/// Generate a weighted graph from a parametric family and print it to
/// stdout in the `N M` / `u v w` text format.
#[derive(Parser)]
#[command(name = "generate", version)]
struct Args {
    /// Graph family
    #[arg(value_enum)]
    family: Family,

    /// Vertex count (row count for `grid`)
    n: usize,

    /// Edge count (`gnm`)
    #[arg(short = 'm', long)]
    edges: Option<usize>,

    /// Edge creation probability (`gnp`)
    #[arg(short, long)]
    prob: Option<f64>,

    /// Column count (`grid`)
    #[arg(short)]
    k: Option<usize>,

    /// Edge weight, or the upper weight bound with --randomize
    #[arg(short, long, default_value_t = 100)]
    weight: u64,

    /// Draw edge weights uniformly from 1..=W instead of setting them all to W
    #[arg(long)]
    randomize: bool,

    /// Randomization seed
    #[arg(short, long, default_value_t = 1234)]
    seed: u64,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Family {
    Complete,
    Gnp,
    Gnm,
    Path,
    Cycle,
    Star,
    Grid,
}

fn build_family(args: &Args, rng: &mut StdRng) -> Result<WeightedGraph> {
    let graph = match args.family {
        Family::Complete => generators::complete_graph(args.n),
        Family::Gnp => {
            let p = args.prob.context("gnp needs an edge probability, pass -p")?;
            if !(0.0..=1.0).contains(&p) {
                bail!("edge probability {p} is outside [0, 1]");
            }
            generators::gnp_random_graph(args.n, p, rng)
        }
        Family::Gnm => {
            let m = args.edges.context("gnm needs an edge count, pass -m")?;
            generators::gnm_random_graph(args.n, m, rng)
        }
        Family::Path => generators::path_graph(args.n),
        Family::Cycle => generators::cycle_graph(args.n),
        Family::Star => generators::star_graph(args.n),
        Family::Grid => {
            let cols = args.k.context("grid needs a column count, pass -k")?;
            generators::grid_2d_graph(args.n, cols)
        }
    };
    Ok(graph)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let mut graph = build_family(&args, &mut rng)?;
    if args.randomize {
        if args.weight < 1 {
            bail!("--randomize needs a weight bound of at least 1");
        }
        generators::randomize_weights(&mut graph, args.weight, &mut rng);
    } else {
        generators::set_uniform_weights(&mut graph, args.weight);
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "generated graph"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Record the invocation so the file documents its own provenance and
    // identical invocations stay byte-identical.
    let argv: Vec<String> = env::args().skip(1).collect();
    writeln!(out, "# generate {}", argv.join(" "))?;
    write_graph(&graph, out)?;
    Ok(())
}
