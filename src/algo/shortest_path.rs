//! Single-source shortest paths (Dijkstra).

use crate::graph::Graph;
use crate::types::{GraphResult, Weight};

use super::priority_queue::PriorityQueue;
use super::traversal::check_source;

/// Output of one Dijkstra run.
#[derive(Debug)]
pub struct ShortestPaths {
    /// Shortest-path tree: one directed edge `parent -> v` per reached vertex.
    pub tree: Graph,
    /// Distance from the source per vertex, `None` when unreachable.
    pub distances: Vec<Option<Weight>>,
}

/// Run Dijkstra from `source`.
///
/// Weights are assumed non-negative; this is not checked. Each improvement of a
/// vertex's distance replaces its previously recorded tree edge, so every reached
/// vertex other than `source` ends with exactly one incoming edge.
pub fn shortest_paths(graph: &Graph, source: usize) -> GraphResult<ShortestPaths> {
    check_source(graph, source)?;

    let n = graph.vertex_count();
    let mut tree = Graph::new(n);
    let mut distances: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut finalized = vec![false; n];
    // A vertex is queued at most once at a time, so `n` slots suffice.
    let mut queue = PriorityQueue::with_capacity(n);

    distances[source] = Some(0);
    queue.insert(source, 0)?;

    while !queue.is_empty() {
        let u = queue.extract_min()?;
        if finalized[u] {
            continue;
        }
        finalized[u] = true;
        let Some(dist_u) = distances[u] else {
            continue;
        };

        for neighbor in graph.neighbors(u) {
            let v = neighbor.vertex;
            let Some(candidate) = dist_u.checked_add(neighbor.weight) else {
                continue;
            };
            if distances[v].is_some_and(|d| d <= candidate) {
                continue;
            }

            distances[v] = Some(candidate);
            if let Some(previous) = parent[v].replace(u) {
                tree.remove_arc(previous, v);
            }
            tree.add_directed_edge(u, v, neighbor.weight)?;
            queue.push_or_decrease(v, candidate)?;
        }
    }

    log::debug!(
        "dijkstra from {source}: reached {} of {n} vertices",
        distances.iter().filter(|d| d.is_some()).count()
    );
    Ok(ShortestPaths { tree, distances })
}

/// Shortest-path tree rooted at `source`.
pub fn dijkstra(graph: &Graph, source: usize) -> GraphResult<Graph> {
    shortest_paths(graph, source).map(|paths| paths.tree)
}
