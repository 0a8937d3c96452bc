//! CLI command implementations.

use crate::algo::{self, Algorithms};
use crate::graph::{Graph, GraphBuilder};
use crate::types::{Edge, GraphResult, Weight, DEFAULT_WEIGHT};

/// Edges of the demonstration graph over [`SAMPLE_VERTICES`] vertices.
pub const SAMPLE_EDGES: [(usize, usize, Weight); 7] = [
    (0, 1, 4),
    (0, 2, 3),
    (1, 2, 1),
    (1, 3, 2),
    (2, 3, 4),
    (3, 4, 2),
    (4, 5, 6),
];

/// Vertex count of the demonstration graph.
pub const SAMPLE_VERTICES: usize = 6;

/// The algorithms runnable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Bfs,
    Dfs,
    Dijkstra,
    Prim,
    Kruskal,
}

impl AlgorithmKind {
    /// All kinds, in demonstration order.
    pub const ALL: [AlgorithmKind; 5] = [
        Self::Bfs,
        Self::Dfs,
        Self::Dijkstra,
        Self::Prim,
        Self::Kruskal,
    ];

    /// Parse an algorithm from its command-line name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" => Some(Self::Bfs),
            "dfs" => Some(Self::Dfs),
            "dijkstra" | "sssp" => Some(Self::Dijkstra),
            "prim" => Some(Self::Prim),
            "kruskal" => Some(Self::Kruskal),
            _ => None,
        }
    }

    /// Command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }

    /// Whether the algorithm starts from a caller-chosen vertex.
    pub fn uses_source(&self) -> bool {
        matches!(self, Self::Bfs | Self::Dfs | Self::Dijkstra)
    }

    fn title(&self, source: usize) -> String {
        match self {
            Self::Bfs => format!("BFS Tree starting from vertex {source}:"),
            Self::Dfs => format!("DFS Tree starting from vertex {source}:"),
            Self::Dijkstra => format!("Shortest Paths Tree from vertex {source}:"),
            Self::Prim => "Minimum Spanning Tree (Prim's):".to_string(),
            Self::Kruskal => "Minimum Spanning Tree (Kruskal's):".to_string(),
        }
    }

    /// Run the algorithm on `graph`. `source` is ignored by Prim and Kruskal.
    pub fn run(&self, graph: &Graph, source: usize) -> GraphResult<AlgorithmRun> {
        log::debug!("running {self} on {} vertices", graph.vertex_count());
        let (tree, distances) = match self {
            Self::Bfs => (Algorithms::bfs(graph, source)?, None),
            Self::Dfs => (Algorithms::dfs(graph, source)?, None),
            Self::Dijkstra => {
                let paths = algo::shortest_paths(graph, source)?;
                (paths.tree, Some(paths.distances))
            }
            Self::Prim => (Algorithms::prim(graph)?, None),
            Self::Kruskal => (Algorithms::kruskal(graph)?, None),
        };
        Ok(AlgorithmRun {
            kind: *self,
            source,
            tree,
            distances,
        })
    }
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One algorithm's output on a graph.
#[derive(Debug)]
pub struct AlgorithmRun {
    pub kind: AlgorithmKind,
    pub source: usize,
    /// Result graph: directed parent -> child arcs, or undirected tree edges.
    pub tree: Graph,
    /// Dijkstra's distance table; `None` for the other algorithms.
    pub distances: Option<Vec<Option<Weight>>>,
}

impl AlgorithmRun {
    /// Weight of the result tree. Directed trees count every arc, undirected
    /// trees count each edge once.
    pub fn total_weight(&self) -> Weight {
        if self.kind.uses_source() {
            self.tree.arc_weight()
        } else {
            self.tree.total_weight()
        }
    }

    /// JSON form: the result graph plus algorithm, total weight, source and distances.
    pub fn to_json(&self) -> serde_json::Value {
        let mut value = graph_json(&self.tree);
        value["algorithm"] = serde_json::json!(self.kind.name());
        value["total_weight"] = serde_json::json!(self.total_weight());
        if self.kind.uses_source() {
            value["source"] = serde_json::json!(self.source);
        }
        if let Some(distances) = &self.distances {
            value["distances"] = serde_json::json!(distances);
        }
        value
    }
}

/// Parse an edge spec of the form `U-V` or `U-V:W`.
///
/// The weight defaults to [`DEFAULT_WEIGHT`] and may be negative (`0-1:-3`).
pub fn parse_edge_spec(spec: &str) -> Result<Edge, String> {
    let (endpoints, weight) = match spec.split_once(':') {
        Some((endpoints, weight)) => {
            let weight = weight
                .trim()
                .parse::<Weight>()
                .map_err(|e| format!("invalid weight in edge spec {spec:?}: {e}"))?;
            (endpoints, weight)
        }
        None => (spec, DEFAULT_WEIGHT),
    };

    let (source, dest) = endpoints
        .split_once('-')
        .ok_or_else(|| format!("edge spec {spec:?} is not of the form U-V or U-V:W"))?;
    let source = source
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid source vertex in edge spec {spec:?}: {e}"))?;
    let dest = dest
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid destination vertex in edge spec {spec:?}: {e}"))?;

    Ok(Edge::new(source, dest, weight))
}

/// Parse every spec, stopping at the first malformed one.
pub fn parse_edge_specs(specs: &[String]) -> Result<Vec<Edge>, String> {
    specs.iter().map(|spec| parse_edge_spec(spec)).collect()
}

/// Build a graph from undirected edges followed by directed arcs.
pub fn build_graph(vertices: usize, edges: &[Edge], arcs: &[Edge]) -> GraphResult<Graph> {
    GraphBuilder::new(vertices)
        .edges(edges.iter().copied())
        .arcs(arcs.iter().copied())
        .build()
}

/// The demonstration graph.
pub fn sample_graph() -> GraphResult<Graph> {
    SAMPLE_EDGES
        .iter()
        .fold(GraphBuilder::new(SAMPLE_VERTICES), |b, &(u, v, w)| {
            b.edge(u, v, w)
        })
        .build()
}

fn separator() {
    println!("\n{}\n", "-".repeat(50));
}

fn graph_json(graph: &Graph) -> serde_json::Value {
    let edges: Vec<Edge> = graph.arcs().collect();
    serde_json::json!({
        "vertices": graph.vertex_count(),
        "arcs": graph.arc_count(),
        "edges": edges,
    })
}

/// Print the sample graph and every algorithm's result on it.
pub fn cmd_demo(json: bool) -> GraphResult<()> {
    let graph = sample_graph()?;

    if json {
        let mut results = Vec::with_capacity(AlgorithmKind::ALL.len());
        for kind in AlgorithmKind::ALL {
            results.push(kind.run(&graph, 0)?.to_json());
        }
        let demo = serde_json::json!({
            "graph": graph_json(&graph),
            "results": results,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&demo).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Original Graph:");
    graph.print_graph();
    for kind in AlgorithmKind::ALL {
        separator();
        println!("{}", kind.title(0));
        kind.run(&graph, 0)?.tree.print_graph();
    }
    Ok(())
}

/// Print a graph built from the command line.
pub fn cmd_show(graph: &Graph, json: bool) -> GraphResult<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&graph_json(graph)).unwrap_or_default()
        );
    } else {
        graph.print_graph();
        println!(
            "{} vertices, {} adjacency entries",
            graph.vertex_count(),
            graph.arc_count()
        );
    }
    Ok(())
}

/// Run one algorithm and print its result graph.
pub fn cmd_run(graph: &Graph, kind: AlgorithmKind, source: usize, json: bool) -> GraphResult<()> {
    let run = kind.run(graph, source)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&run.to_json()).unwrap_or_default()
        );
        return Ok(());
    }

    println!("{}", kind.title(source));
    run.tree.print_graph();
    println!("Total weight: {}", run.total_weight());
    if let Some(distances) = &run.distances {
        for (vertex, distance) in distances.iter().enumerate() {
            match distance {
                Some(d) => println!("  dist[{vertex}] = {d}"),
                None => println!("  dist[{vertex}] = unreachable"),
            }
        }
    }
    Ok(())
}
