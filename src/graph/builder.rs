//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphResult, Weight, DEFAULT_WEIGHT};

use super::Graph;

#[derive(Debug, Clone, Copy)]
enum Pending {
    Undirected(Edge),
    Directed(Edge),
}

/// Fluent builder for constructing a [`Graph`].
///
/// Insertions are recorded and replayed in order by [`GraphBuilder::build`], which
/// reports the first one the graph rejects.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    vertex_count: usize,
    pending: Vec<Pending>,
}

impl GraphBuilder {
    /// Create a new builder for a graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            pending: Vec::new(),
        }
    }

    /// Add an undirected weighted edge.
    pub fn edge(mut self, source: usize, dest: usize, weight: Weight) -> Self {
        self.pending
            .push(Pending::Undirected(Edge::new(source, dest, weight)));
        self
    }

    /// Add an undirected edge with the default weight.
    pub fn unit_edge(self, source: usize, dest: usize) -> Self {
        self.edge(source, dest, DEFAULT_WEIGHT)
    }

    /// Add a directed weighted edge.
    pub fn arc(mut self, source: usize, dest: usize, weight: Weight) -> Self {
        self.pending
            .push(Pending::Directed(Edge::new(source, dest, weight)));
        self
    }

    /// Add every edge of an iterator as undirected.
    pub fn edges<I>(self, edges: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        edges
            .into_iter()
            .fold(self, |b, e| b.edge(e.source, e.dest, e.weight))
    }

    /// Add every edge of an iterator as directed.
    pub fn arcs<I>(self, arcs: I) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        arcs.into_iter()
            .fold(self, |b, e| b.arc(e.source, e.dest, e.weight))
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::new(self.vertex_count);
        for pending in self.pending {
            let (edge, inserted) = match pending {
                Pending::Undirected(e) => (e, graph.add_edge(e.source, e.dest, e.weight)),
                Pending::Directed(e) => (e, graph.add_directed_edge(e.source, e.dest, e.weight)),
            };
            inserted.inspect_err(|err| log::debug!("builder rejected {edge}: {err}"))?;
        }
        Ok(graph)
    }
}
