//! Minimum spanning trees and forests (Prim, Kruskal).

use crate::graph::Graph;
use crate::types::{Edge, GraphResult, Weight};

use super::priority_queue::PriorityQueue;
use super::union_find::UnionFind;

/// Minimum spanning tree of the component containing vertex 0.
///
/// Tree edges are stored undirected. Other components stay edgeless; an empty graph
/// yields an empty graph.
pub fn prim(graph: &Graph) -> GraphResult<Graph> {
    let n = graph.vertex_count();
    let mut tree = Graph::new(n);
    if n == 0 {
        return Ok(tree);
    }

    let mut key: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut in_tree = vec![false; n];
    let mut queue = PriorityQueue::with_capacity(n);

    key[0] = Some(0);
    queue.insert(0, 0)?;

    while !queue.is_empty() {
        let u = queue.extract_min()?;
        if in_tree[u] {
            continue;
        }
        in_tree[u] = true;

        if let (Some(p), Some(weight)) = (parent[u], key[u]) {
            tree.add_edge(p, u, weight)?;
        }

        for neighbor in graph.neighbors(u) {
            let v = neighbor.vertex;
            if in_tree[v] || key[v].is_some_and(|k| k <= neighbor.weight) {
                continue;
            }
            parent[v] = Some(u);
            key[v] = Some(neighbor.weight);
            queue.push_or_decrease(v, neighbor.weight)?;
        }
    }

    log::debug!(
        "prim: {} tree edges, total weight {}",
        tree.arc_count() / 2,
        tree.total_weight()
    );
    Ok(tree)
}

/// Minimum spanning forest across all components.
///
/// Edges are considered by ascending weight; equal weights keep the order of
/// [`Graph::undirected_edges`].
pub fn kruskal(graph: &Graph) -> GraphResult<Graph> {
    let n = graph.vertex_count();
    let mut forest = Graph::new(n);
    let mut sets = UnionFind::new(n);

    let mut edges: Vec<Edge> = graph.undirected_edges().collect();
    edges.sort_by_key(|e| e.weight);

    for edge in edges {
        if sets.find(edge.source) == sets.find(edge.dest) {
            continue;
        }
        forest.add_edge(edge.source, edge.dest, edge.weight)?;
        sets.unite(edge.source, edge.dest);
    }

    log::debug!(
        "kruskal: {} forest edges, total weight {}",
        forest.arc_count() / 2,
        forest.total_weight()
    );
    Ok(forest)
}
