//! All data types for the weighted-graph library.

pub mod edge;
pub mod error;

pub use edge::{Edge, Neighbor};
pub use error::{GraphError, GraphResult};

/// Edge weight. No sign constraint is enforced.
pub type Weight = i64;

/// Weight used by the unit-weight insertion helpers.
pub const DEFAULT_WEIGHT: Weight = 1;
