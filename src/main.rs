// Copyright (C) 2014 Samuel de Sousa, 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver.
//!
//! ```text
//! n1graph <N>                 G_N graph of a regular N-gon
//! n1graph <points1> <points2> register two point lists
//! ```

use std::path::{Path, PathBuf};
use std::process::{self, Command};

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use n1graph::io::{read_points, write_text};
use n1graph::{regular_polygon, Matching, Minimizer, Point, WeightedGraph};

const RESULT_1: &str = "graph_result1.csv";
const RESULT_2: &str = "graph_result2.csv";
const DIAGRAM: &str = "graph_result.tex";
const EXIT_USAGE: i32 = -1;

#[derive(Parser, Debug)]
#[command(name = "n1graph", version, about = "Build and register G_N graphs of point sets")]
struct Cli {
    /// Either a node count N, or two point-list files
    #[arg(num_args = 0..=2)]
    inputs: Vec<String>,

    /// Radius of the regular polygon in N-gon mode
    #[arg(long, default_value_t = 1.0)]
    radius: f32,

    /// Horizontal offset of the second graph in the diagram
    #[arg(long, default_value_t = 25.0)]
    gap_x: f32,

    /// Vertical offset of the second graph in the diagram
    #[arg(long, default_value_t = 0.0)]
    gap_y: f32,

    /// Fraction of correspondence edges drawn, in [0, 1]
    #[arg(long, default_value_t = 1.0)]
    edge_fraction: f32,

    /// Directory receiving the result files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Command run afterwards with both serialized graphs as arguments
    #[arg(long)]
    visualize: Option<String>,
}

fn polygon_mode(cli: &Cli, n: usize) -> anyhow::Result<Vec<PathBuf>> {
    if n < n1graph::minimize::MIN_NODES {
        bail!("need at least {} nodes, got {}", n1graph::minimize::MIN_NODES, n);
    }
    info!(nodes = n, "Building regular polygon graph");
    let input = WeightedGraph::complete_euclidean(&regular_polygon(n, cli.radius));
    let graph = Minimizer::new().minimize(&input).into_graph();

    info!("Writing results");
    let serialized = cli.output_dir.join(RESULT_1);
    write_text(&serialized, &graph.to_string())?;
    write_text(cli.output_dir.join(DIAGRAM), &graph.to_tikz())?;
    Ok(vec![serialized])
}

fn load_graph(path: &Path) -> anyhow::Result<WeightedGraph> {
    let points = read_points(path)?;
    if points.len() <= 2 {
        bail!(
            "{} holds {} points, registration needs more than 2",
            path.display(),
            points.len()
        );
    }
    Ok(WeightedGraph::complete_euclidean(&points))
}

fn registration_mode(cli: &Cli, first: &Path, second: &Path) -> anyhow::Result<Vec<PathBuf>> {
    if !(0.0..=1.0).contains(&cli.edge_fraction) {
        bail!("edge fraction {} outside [0, 1]", cli.edge_fraction);
    }
    info!("Building graphs");
    let graph_a = load_graph(first)?;
    let graph_b = load_graph(second)?;
    if graph_a.node_count() != graph_b.node_count() {
        bail!(
            "point lists differ in size ({} and {})",
            graph_a.node_count(),
            graph_b.node_count()
        );
    }

    info!("Minimizing cost function");
    let mut minimizer = Minimizer::new();
    let g_a = minimizer.minimize(&graph_a);
    let g_b = minimizer.minimize(&graph_b);

    let mut matching = Matching::new();
    matching.register(&g_a, &g_b);
    for point in 0..matching.node_count() {
        info!(point, corresponds_to = matching.correspondence(0, point), "Correspondence");
    }

    info!("Writing results");
    let serialized = [cli.output_dir.join(RESULT_1), cli.output_dir.join(RESULT_2)];
    write_text(&serialized[0], &g_a.graph().to_string())?;
    write_text(&serialized[1], &g_b.graph().to_string())?;
    let gap = Point::new(cli.gap_x, cli.gap_y);
    let tex = matching.to_tikz(g_a.graph(), g_b.graph(), gap, cli.edge_fraction);
    write_text(cli.output_dir.join(DIAGRAM), &tex)?;
    Ok(serialized.to_vec())
}

/// Run the selected mode and return the serialized graphs it wrote, or
/// `None` when no input was given.
fn run(cli: &Cli) -> anyhow::Result<Option<Vec<PathBuf>>> {
    let written = match cli.inputs.as_slice() {
        [] => return Ok(None),
        [n] => {
            let n: usize = n
                .parse()
                .with_context(|| format!("{:?} is not a node count", n))?;
            polygon_mode(cli, n)?
        }
        [first, second, ..] => registration_mode(cli, Path::new(first), Path::new(second))?,
    };
    Ok(Some(written))
}

fn run_visualization(command: &str, graphs: &[PathBuf]) {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        warn!("Empty visualization command");
        return;
    };
    info!(command, "Run visualization");
    let status = Command::new(program).args(parts).args(graphs).status();
    match status {
        Ok(status) if status.success() => {}
        Ok(status) => warn!(%status, "Visualization command failed"),
        Err(e) => warn!(error = %e, "Could not run visualization command"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let Some(graphs) = run(&cli)? else {
        warn!("Expected a node count or two point sets");
        process::exit(EXIT_USAGE);
    };

    if let Some(command) = &cli.visualize {
        run_visualization(command, &graphs);
    }
    Ok(())
}
