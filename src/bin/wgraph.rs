//! CLI entry point for the `wgraph` command-line tool.

use std::process;

use clap::{Args, Parser, Subcommand};

use weighted_graph::cli::commands::{self, AlgorithmKind};
use weighted_graph::{Graph, GraphError, GraphResult};

#[derive(Parser)]
#[command(
    name = "wgraph",
    about = "Build weighted graphs and run BFS, DFS, Dijkstra, Prim and Kruskal on them"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Graph described on the command line.
#[derive(Args)]
struct GraphArgs {
    /// Number of vertices
    #[arg(long, short = 'n')]
    vertices: usize,

    /// Undirected edge as U-V or U-V:W (repeatable)
    #[arg(long = "edge", short = 'e')]
    edges: Vec<String>,

    /// Directed edge as U-V or U-V:W (repeatable)
    #[arg(long = "arc", short = 'a')]
    arcs: Vec<String>,
}

impl GraphArgs {
    /// Build the graph, exiting with code 3 on a malformed edge spec.
    fn build(&self) -> GraphResult<Graph> {
        let parsed = commands::parse_edge_specs(&self.edges)
            .and_then(|edges| commands::parse_edge_specs(&self.arcs).map(|arcs| (edges, arcs)));
        let (edges, arcs) = match parsed {
            Ok(parsed) => parsed,
            Err(msg) => {
                eprintln!("Invalid edge spec: {}", msg);
                process::exit(3);
            }
        };
        commands::build_graph(self.vertices, &edges, &arcs)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run every algorithm on the built-in sample graph
    Demo,
    /// Print the adjacency lists of a graph
    Show {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Run one algorithm on a graph
    Run {
        /// Algorithm: bfs, dfs, dijkstra, prim, kruskal
        algorithm: String,
        #[command(flatten)]
        graph: GraphArgs,
        /// Start vertex (ignored by prim and kruskal)
        #[arg(long, short = 's', default_value = "0")]
        source: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_module("weighted_graph", log::LevelFilter::Debug)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .init();
    }

    let result = match cli.command {
        Commands::Demo => commands::cmd_demo(json),
        Commands::Show { graph } => graph.build().and_then(|g| commands::cmd_show(&g, json)),
        Commands::Run {
            algorithm,
            graph,
            source,
        } => {
            let kind = match AlgorithmKind::from_name(&algorithm) {
                Some(kind) => kind,
                None => {
                    eprintln!("Invalid algorithm: {}", algorithm);
                    process::exit(3);
                }
            };
            graph
                .build()
                .and_then(|g| commands::cmd_run(&g, kind, source, json))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::VertexOutOfRange { .. }
            | GraphError::SelfLoop(_)
            | GraphError::DuplicateEdge { .. }
            | GraphError::MissingEdge { .. } => 4,
            GraphError::CapacityExhausted { .. } | GraphError::Underflow => 5,
        };
        process::exit(code);
    }
}
