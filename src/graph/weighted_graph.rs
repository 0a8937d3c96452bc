//! Core graph structure — a fixed vertex set with per-vertex adjacency lists.

use std::fmt;

use crate::types::{Edge, GraphError, GraphResult, Neighbor, Weight, DEFAULT_WEIGHT};

/// A weighted graph over the dense vertex set `0..vertex_count`.
///
/// Each vertex owns an insertion-ordered list of [`Neighbor`]s. Undirected edges are
/// stored once in each endpoint's list; directed edges only in the source's list.
/// At most one entry exists for any ordered pair of vertices, and self-loops are
/// rejected.
///
/// `Graph` is deliberately not `Clone`: algorithms hand back freshly built graphs by
/// value, and duplicating one has to be spelled out through [`GraphBuilder`] or
/// [`Graph::arcs`].
///
/// [`GraphBuilder`]: super::GraphBuilder
#[derive(Debug, PartialEq, Eq)]
pub struct Graph {
    /// Adjacency list per vertex, in insertion order.
    adjacency: Vec<Vec<Neighbor>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: (0..vertex_count).map(|_| Vec::with_capacity(1)).collect(),
        }
    }

    /// Number of vertices. Fixed at construction.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of adjacency entries. An undirected edge counts twice.
    pub fn arc_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Number of entries in a vertex's adjacency list (0 for an unknown vertex).
    pub fn neighbor_count(&self, vertex: usize) -> usize {
        self.neighbors(vertex).len()
    }

    /// Adjacency list of a vertex, in insertion order.
    pub fn neighbors(&self, vertex: usize) -> &[Neighbor] {
        match self.adjacency.get(vertex) {
            Some(list) => list,
            None => &[],
        }
    }

    /// Whether `dest` appears in `source`'s adjacency list.
    pub fn has_edge(&self, source: usize, dest: usize) -> bool {
        self.neighbors(source).iter().any(|n| n.vertex == dest)
    }

    /// Add an undirected edge, stored in both endpoints' lists.
    ///
    /// Fails with [`GraphError::VertexOutOfRange`], [`GraphError::SelfLoop`] or
    /// [`GraphError::DuplicateEdge`]; nothing is modified on failure.
    pub fn add_edge(&mut self, source: usize, dest: usize, weight: Weight) -> GraphResult<()> {
        self.validate_insert(source, dest)
            .and_then(|()| {
                // Either direction already present would break pair uniqueness.
                if self.has_edge(dest, source) {
                    return Err(GraphError::DuplicateEdge {
                        from: dest,
                        to: source,
                    });
                }
                Ok(())
            })
            .inspect_err(|e| log::trace!("add_edge({source}, {dest}) rejected: {e}"))?;

        self.adjacency[source].push(Neighbor::new(dest, weight));
        self.adjacency[dest].push(Neighbor::new(source, weight));
        Ok(())
    }

    /// Add an undirected edge with [`DEFAULT_WEIGHT`].
    pub fn add_unit_edge(&mut self, source: usize, dest: usize) -> GraphResult<()> {
        self.add_edge(source, dest, DEFAULT_WEIGHT)
    }

    /// Add a directed edge, stored only in `source`'s list.
    ///
    /// Only `source -> dest` is checked for duplicates; an existing `dest -> source`
    /// entry is a distinct relation and does not block the insertion.
    pub fn add_directed_edge(
        &mut self,
        source: usize,
        dest: usize,
        weight: Weight,
    ) -> GraphResult<()> {
        self.validate_insert(source, dest)
            .inspect_err(|e| log::trace!("add_directed_edge({source}, {dest}) rejected: {e}"))?;

        self.adjacency[source].push(Neighbor::new(dest, weight));
        Ok(())
    }

    /// Add a directed edge with [`DEFAULT_WEIGHT`].
    pub fn add_unit_directed_edge(&mut self, source: usize, dest: usize) -> GraphResult<()> {
        self.add_directed_edge(source, dest, DEFAULT_WEIGHT)
    }

    /// Remove the edge between `source` and `dest` from both endpoints' lists.
    ///
    /// Fails with [`GraphError::MissingEdge`] when `dest` is not in `source`'s list.
    /// Remaining entries keep their relative order.
    pub fn remove_edge(&mut self, source: usize, dest: usize) -> GraphResult<()> {
        self.check_vertex(source)?;
        self.check_vertex(dest)?;
        if !self.has_edge(source, dest) {
            log::trace!("remove_edge({source}, {dest}) rejected: no such edge");
            return Err(GraphError::MissingEdge {
                from: source,
                to: dest,
            });
        }

        self.remove_arc(source, dest);
        self.remove_arc(dest, source);
        Ok(())
    }

    /// Every adjacency entry as an [`Edge`], in vertex then insertion order.
    pub fn arcs(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(source, list)| {
            list.iter()
                .map(move |n| Edge::new(source, n.vertex, n.weight))
        })
    }

    /// Each undirected edge once, taken from the lower-numbered endpoint's list.
    pub fn undirected_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.arcs().filter(|e| e.source < e.dest)
    }

    /// Sum of weights over [`Graph::undirected_edges`].
    pub fn total_weight(&self) -> Weight {
        self.undirected_edges().map(|e| e.weight).sum()
    }

    /// Sum of weights over every adjacency entry. For a directed tree this is
    /// the weight of the tree.
    pub fn arc_weight(&self) -> Weight {
        self.arcs().map(|e| e.weight).sum()
    }

    /// Print the adjacency dump to stdout.
    pub fn print_graph(&self) {
        print!("{self}");
    }

    /// Drop the `source -> dest` entry if present, shifting later entries left.
    pub(crate) fn remove_arc(&mut self, source: usize, dest: usize) -> bool {
        let Some(list) = self.adjacency.get_mut(source) else {
            return false;
        };
        match list.iter().position(|n| n.vertex == dest) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    fn check_vertex(&self, vertex: usize) -> GraphResult<()> {
        if vertex >= self.vertex_count() {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            });
        }
        Ok(())
    }

    fn validate_insert(&self, source: usize, dest: usize) -> GraphResult<()> {
        self.check_vertex(source)?;
        self.check_vertex(dest)?;
        if source == dest {
            return Err(GraphError::SelfLoop(source));
        }
        if self.has_edge(source, dest) {
            return Err(GraphError::DuplicateEdge {
                from: source,
                to: dest,
            });
        }
        Ok(())
    }
}

/// One line per vertex: `Vertex i: (v, w=x) (v, w=x)`.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, list) in self.adjacency.iter().enumerate() {
            write!(f, "Vertex {vertex}:")?;
            for n in list {
                write!(f, " ({}, w={})", n.vertex, n.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
