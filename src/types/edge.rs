//! Adjacency entries and flat edge records.

use serde::Serialize;

use super::Weight;

/// One entry of a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Neighbor {
    /// The vertex at the other end of the edge.
    pub vertex: usize,
    /// Weight of the edge.
    pub weight: Weight,
}

impl Neighbor {
    /// Create a new adjacency entry.
    pub fn new(vertex: usize, weight: Weight) -> Self {
        Self { vertex, weight }
    }
}

/// A weighted edge with both endpoints spelled out.
///
/// Produced when enumerating a graph; the graph itself stores [`Neighbor`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Vertex the edge leaves from.
    pub source: usize,
    /// Vertex the edge arrives at.
    pub dest: usize,
    /// Weight of the edge.
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge record.
    pub fn new(source: usize, dest: usize, weight: Weight) -> Self {
        Self {
            source,
            dest,
            weight,
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} (w={})", self.source, self.dest, self.weight)
    }
}
