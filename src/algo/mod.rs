//! Graph algorithms — traversal trees, shortest paths and spanning trees.
//!
//! Every algorithm reads its input graph and returns a new graph of the same vertex
//! count holding only the edges it selected. Working structures (queue, heap,
//! disjoint sets) are allocated per call and dropped on return.

mod priority_queue;
mod queue;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;
mod union_find;

pub use shortest_path::{dijkstra, shortest_paths, ShortestPaths};
pub use spanning_tree::{kruskal, prim};
pub use traversal::{bfs, dfs};

use crate::graph::Graph;
use crate::types::{GraphResult, Weight};

/// Stateless entry point for the algorithms.
pub struct Algorithms;

impl Algorithms {
    /// Breadth-first tree from `source`, as directed parent -> child edges.
    pub fn bfs(graph: &Graph, source: usize) -> GraphResult<Graph> {
        bfs(graph, source)
    }

    /// Depth-first tree from `source`, as directed parent -> child edges.
    pub fn dfs(graph: &Graph, source: usize) -> GraphResult<Graph> {
        dfs(graph, source)
    }

    /// Shortest-path tree from `source`, as directed parent -> child edges.
    pub fn dijkstra(graph: &Graph, source: usize) -> GraphResult<Graph> {
        dijkstra(graph, source)
    }

    /// Shortest distances from `source`; `None` marks unreachable vertices.
    pub fn shortest_distances(graph: &Graph, source: usize) -> GraphResult<Vec<Option<Weight>>> {
        shortest_paths(graph, source).map(|paths| paths.distances)
    }

    /// Minimum spanning tree of vertex 0's component, as undirected edges.
    pub fn prim(graph: &Graph) -> GraphResult<Graph> {
        prim(graph)
    }

    /// Minimum spanning forest, as undirected edges.
    pub fn kruskal(graph: &Graph) -> GraphResult<Graph> {
        kruskal(graph)
    }
}
