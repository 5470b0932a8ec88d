//! tour-timer - Builds a sample graph and measures how long Eulerian tour computations take.

use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use eulertour::{
    algo::{DetourAnchor, Hierholzer},
    gens::EulerianFixtures,
    prelude::{AdjMatrix, GraphEdgeOrder, GraphNodeOrder, Node, NumNodes},
};
use eyre::{Result, WrapErr, eyre};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::{debug, info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Sample graph families
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Family {
    /// Cycle through all nodes
    Ring,
    /// All pairs of distinct nodes connected
    Complete,
}

/// Which endpoint of a walked step triggers a detour
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Anchor {
    Destination,
    Origin,
}

impl From<Anchor> for DetourAnchor {
    fn from(value: Anchor) -> Self {
        match value {
            Anchor::Destination => DetourAnchor::Destination,
            Anchor::Origin => DetourAnchor::Origin,
        }
    }
}

/// Command line arguments for tour-timer
#[derive(Debug, Parser)]
#[command(author, about = "Times randomized Hierholzer tours on sample graphs", long_about = None)]
struct Args {
    /// Graph family to build
    #[arg(long, value_enum, default_value = "complete")]
    family: Family,

    /// Number of nodes
    #[arg(long, short, default_value = "51")]
    nodes: NumNodes,

    /// Vertex the tour starts and ends at
    #[arg(long, default_value = "0")]
    start: Node,

    /// Number of tours to compute
    #[arg(long, short, default_value = "5")]
    repeat: u32,

    /// Seed for reproducible runs; a random seed is drawn if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Endpoint checked for detours
    #[arg(long, value_enum, default_value = "destination")]
    anchor: Anchor,

    /// Print every tour as a vertex sequence
    #[arg(long)]
    print: bool,
}

impl Args {
    fn graph(&self) -> Result<AdjMatrix> {
        let graph = match self.family {
            Family::Ring => AdjMatrix::ring(self.nodes),
            Family::Complete => AdjMatrix::complete(self.nodes),
        };
        graph.wrap_err_with(|| format!("cannot build {:?} graph on {} nodes", self.family, self.nodes))
    }

    fn run(self) -> Result<()> {
        let mut graph = self.graph()?;
        let seed = self.seed.unwrap_or_else(rand::random);
        let rng = &mut Pcg64Mcg::seed_from_u64(seed);
        let algo = Hierholzer::new().anchor(self.anchor.into());

        info!(
            family = ?self.family,
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            seed,
            "built sample graph"
        );

        let mut total = Duration::ZERO;
        for i in 0..self.repeat {
            let timer = Instant::now();
            let tour = algo.run(&mut graph, rng, self.start)?;
            let elapsed = timer.elapsed();
            total += elapsed;

            if !tour.covers(&graph) || !tour.is_closed_walk() {
                return Err(eyre!("run {i} produced an invalid tour: {tour}"));
            }

            info!(run = i, steps = tour.len(), ?elapsed, "found Eulerian tour");
            if self.print {
                println!("{tour}");
            } else {
                debug!(%tour);
            }
        }

        if self.repeat > 0 {
            info!(
                runs = self.repeat,
                ?total,
                mean = ?(total / self.repeat),
                "done"
            );
        }

        Ok(())
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder().with_default_directive(LevelFilter::INFO.into()).from_env_lossy(),
        )
        .init();

    let args = Args::parse();
    if let Err(err) = args.run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
