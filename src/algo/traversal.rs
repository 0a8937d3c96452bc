//! Graph traversal algorithms (BFS, DFS) producing traversal trees.

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

use super::queue::Queue;

pub(crate) fn check_source(graph: &Graph, source: usize) -> GraphResult<()> {
    if source >= graph.vertex_count() {
        return Err(GraphError::VertexOutOfRange {
            vertex: source,
            vertex_count: graph.vertex_count(),
        });
    }
    Ok(())
}

/// Breadth-first tree rooted at `source`.
///
/// Each newly discovered vertex `v` gets one directed edge `u -> v` from the vertex
/// that discovered it, carrying the original weight. Vertices outside `source`'s
/// component have no edges in the result.
pub fn bfs(graph: &Graph, source: usize) -> GraphResult<Graph> {
    check_source(graph, source)?;

    let n = graph.vertex_count();
    let mut tree = Graph::new(n);
    let mut visited = vec![false; n];
    let mut queue = Queue::with_capacity(n);

    visited[source] = true;
    queue.enqueue(source)?;

    while !queue.is_empty() {
        let u = queue.dequeue()?;
        for neighbor in graph.neighbors(u) {
            let v = neighbor.vertex;
            if visited[v] {
                continue;
            }
            visited[v] = true;
            tree.add_directed_edge(u, v, neighbor.weight)?;
            queue.enqueue(v)?;
        }
    }

    log::debug!(
        "bfs from {source}: {} tree edges over {n} vertices",
        tree.arc_count()
    );
    Ok(tree)
}

/// Depth-first tree rooted at `source`, in pre-order.
///
/// Produces the same tree as the recursive formulation (descend into the first
/// unvisited neighbor, then resume the scan) but keeps an explicit stack of
/// `(vertex, next neighbor slot)` frames so deep graphs cannot overflow the call stack.
pub fn dfs(graph: &Graph, source: usize) -> GraphResult<Graph> {
    check_source(graph, source)?;

    let n = graph.vertex_count();
    let mut tree = Graph::new(n);
    let mut visited = vec![false; n];
    let mut stack: Vec<(usize, usize)> = vec![(source, 0)];
    visited[source] = true;

    while let Some(frame) = stack.last_mut() {
        let (u, slot) = *frame;
        let Some(neighbor) = graph.neighbors(u).get(slot) else {
            stack.pop();
            continue;
        };
        frame.1 += 1;

        let v = neighbor.vertex;
        if !visited[v] {
            visited[v] = true;
            tree.add_directed_edge(u, v, neighbor.weight)?;
            stack.push((v, 0));
        }
    }

    log::debug!(
        "dfs from {source}: {} tree edges over {n} vertices",
        tree.arc_count()
    );
    Ok(tree)
}
