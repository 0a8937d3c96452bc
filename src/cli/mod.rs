//! Command implementations behind the `wgraph` binary.

pub mod commands;

pub use commands::{parse_edge_spec, parse_edge_specs, AlgorithmKind, AlgorithmRun};
