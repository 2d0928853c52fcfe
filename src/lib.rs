//! Minimum spanning trees with Kruskal's algorithm.
//!
//! Edges are sorted by weight and taken greedily, with a disjoint-set
//! (path compression, union by rank) rejecting any edge that would close a
//! cycle. Disconnected graphs yield a spanning forest rather than an error.

pub mod cs;
pub mod error;
pub mod harness;

pub use cs::graph;
pub use cs::graph::{build_mst, build_mst_batch, DisjointSet, Edge, MinimumSpanningForest};
pub use error::{Error, Result};
