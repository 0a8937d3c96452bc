//! weighted-graph — in-memory weighted graphs with classic algorithms.
//!
//! A [`Graph`] holds a fixed set of vertices `0..n` with insertion-ordered adjacency
//! lists. [`Algorithms`] builds BFS/DFS trees, Dijkstra shortest-path trees and
//! Prim/Kruskal minimum spanning trees, each returned as a new graph.

pub mod algo;
pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use algo::{Algorithms, ShortestPaths};
pub use graph::{Graph, GraphBuilder};
pub use types::{Edge, GraphError, GraphResult, Neighbor, Weight, DEFAULT_WEIGHT};
